// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::PathBuf;

use tl_core::{tag_index, EventStore};

use crate::cli::OutputFormat;
use crate::display::format_tag_line;
use crate::error::Result;
use crate::load::load_store;

pub fn run(paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let store = load_store(paths)?;
    run_impl(&store, format, &mut io::stdout().lock())
}

/// Internal implementation that accepts the store and writer for testing.
pub(crate) fn run_impl(store: &EventStore, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let index = tag_index(store.events());
    match format {
        OutputFormat::Text => {
            for entry in &index {
                writeln!(out, "{}", format_tag_line(entry))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &index)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
