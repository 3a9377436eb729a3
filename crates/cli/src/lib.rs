// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tlrs - command-line host for the timeline filtering engine.
//!
//! This crate provides the functionality behind the `tl` CLI tool. It loads
//! documents extracted to JSON, selects documents with boolean tag
//! expressions and hands the rest of the search to [`tl_core`].
//!
//! # Main Components
//!
//! - [`Cli`] - command-line definition
//! - [`Config`] - optional `timeline.toml` with search defaults and log level
//! - [`filter`] - document tag expressions (`a && (b || !c)`)
//! - [`load`] - reading document files into an [`tl_core::EventStore`]
//! - [`Error`] - error types for all operations
//!
//! # Example
//!
//! ```rust,ignore
//! use tlrs::{load::load_store, filter::parse_tag_expr};
//!
//! let store = load_store(&[PathBuf::from("notes")])?;
//! let expr = parse_tag_expr("history && !draft")?;
//! let params = SearchParams { tags: Some("history && !draft".into()), ..Default::default() };
//! let events = tl_core::search(&store, &params, &expr)?;
//! ```

mod cli;
mod commands;
mod display;
pub mod filter;
mod logging;

pub mod config;
pub mod error;
pub mod load;

pub use cli::{Cli, Command, OutputFormat, SearchArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;
    logging::init(cli.verbose, config.log.level.as_deref())?;
    run_command(cli.command, &config)
}

fn run_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Search { search, output } => commands::search::run(config, &search, output),
        Command::Tags { paths, output } => commands::tags::run(&paths, output),
        Command::Sum { search, unit } => commands::sum::run(config, &search, unit.as_deref()),
        Command::Normalize { dates } => commands::normalize::run(&dates),
        Command::Expand { tag } => commands::expand::run(&tag),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "tl", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
