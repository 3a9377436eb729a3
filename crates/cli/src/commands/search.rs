// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use tl_core::{EventStore, SearchParams, TimelineEvent};

use crate::cli::{OutputFormat, SearchArgs};
use crate::config::Config;
use crate::display::format_event_line;
use crate::error::Result;
use crate::load::load_store;

use super::search_store;

pub fn run(config: &Config, args: &SearchArgs, format: OutputFormat) -> Result<()> {
    let store = load_store(&args.paths)?;
    let params = config.search.merge(args);
    run_impl(&store, &params, format, &mut io::stdout().lock())
}

/// Internal implementation that accepts the store and writer for testing.
pub(crate) fn run_impl(
    store: &EventStore,
    params: &SearchParams,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let events = search_store(store, params)?;
    write_events(&events, format, out)
}

fn write_events(events: &[TimelineEvent], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for event in events {
                writeln!(out, "{}", format_event_line(event))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, events)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
