// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use tl_core::normalize;

use crate::display::UNKNOWN_DATE;
use crate::error::Result;

pub fn run(dates: &[String]) -> Result<()> {
    run_impl(dates, &mut io::stdout().lock())
}

/// Print one normalized value per date, `unknown` for unreadable input.
pub(crate) fn run_impl(dates: &[String], out: &mut impl Write) -> Result<()> {
    for date in dates {
        match normalize(Some(date.as_str())) {
            Some(value) => writeln!(out, "{}", value)?,
            None => writeln!(out, "{}", UNKNOWN_DATE)?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
