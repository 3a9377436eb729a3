// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use tl_core::{totals_by_family, EventStore, ScalarValue, SearchParams, Unit};

use crate::cli::SearchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::load::load_store;

use super::search_store;

pub fn run(config: &Config, args: &SearchArgs, unit: Option<&str>) -> Result<()> {
    let unit = unit.map(str::parse::<Unit>).transpose()?;
    let store = load_store(&args.paths)?;
    let params = config.search.merge(args);
    run_impl(&store, &params, unit, &mut io::stdout().lock())
}

/// Internal implementation that accepts the store and writer for testing.
///
/// Without a unit, prints one base-unit total per family present. With a
/// unit, prints the total of that unit's family converted to it.
pub(crate) fn run_impl(
    store: &EventStore,
    params: &SearchParams,
    unit: Option<Unit>,
    out: &mut impl Write,
) -> Result<()> {
    let events = search_store(store, params)?;
    let quantities = events.iter().filter_map(|e| e.quantity());

    match unit {
        None => {
            for total in totals_by_family(quantities) {
                writeln!(out, "{}", total)?;
            }
        }
        Some(unit) => {
            let family = unit.family();
            let total = ScalarValue::sum(quantities.filter(|q| q.family() == family))?
                .unwrap_or_else(|| ScalarValue::new(0.0, unit));
            writeln!(out, "{}", total.convert(unit)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "sum_tests.rs"]
mod tests;
