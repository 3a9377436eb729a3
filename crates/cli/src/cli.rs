// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  tl search notes/                          List every event under notes/
  tl search --date-start 1900 --date-end 2000
                                            Events overlapping the 20th century
  tl search --tags '#travel && !draft'      Events of documents tagged travel
  tl sum --event-tags run --unit km         Total distance of run events";

#[derive(Parser, Debug)]
#[command(name = "tl")]
#[command(about = "Search timeline events extracted from tagged documents")]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Path to a config file (default: ./timeline.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Search flags shared by `search` and `sum`.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Documents or directories to load (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Document tag expression, e.g. "work && (meeting || #call)"
    #[arg(long)]
    pub tags: Option<String>,

    /// Event tags separated by ';' ("none" selects untagged events)
    #[arg(long)]
    pub event_tags: Option<String>,

    /// Earliest date of the window (year[/month[/day]])
    #[arg(long, allow_hyphen_values = true)]
    pub date_start: Option<String>,

    /// Latest date of the window (year[/month[/day]])
    #[arg(long, allow_hyphen_values = true)]
    pub date_end: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search events by document tags, event tags and date window
    #[command(after_help = "Examples:\n  \
        tl search                               All events under the current directory\n  \
        tl search notes/ --event-tags 'war;peace'\n                                          \
        Events tagged war or peace (or beneath them)\n  \
        tl search --event-tags none             Events without tags\n  \
        tl search --date-start -500 --date-end 1  Events overlapping 500 BC to AD 1")]
    Search {
        #[command(flatten)]
        search: SearchArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show the event tag inventory with parents and counts
    Tags {
        /// Documents or directories to load (default: current directory)
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Total the quantities of matching events per unit family
    Sum {
        #[command(flatten)]
        search: SearchArgs,

        /// Convert totals to this unit (e.g. km, h)
        #[arg(long)]
        unit: Option<String>,
    },

    /// Print the normalized sort value of each date
    #[command(arg_required_else_help = true)]
    Normalize {
        /// Dates as year[/month[/day]]
        #[arg(required = true, allow_hyphen_values = true)]
        dates: Vec<String>,
    },

    /// Print a tag and its ancestors with their parents
    Expand {
        /// Hierarchical tag, e.g. "a/b/c"
        tag: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
