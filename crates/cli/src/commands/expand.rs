// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use tl_core::expand_with_parent;

use crate::display::format_expansion;
use crate::error::Result;

pub fn run(tag: &str) -> Result<()> {
    run_impl(tag, &mut io::stdout().lock())
}

/// Print the tag and each ancestor, most specific first, with its parent.
pub(crate) fn run_impl(tag: &str, out: &mut impl Write) -> Result<()> {
    for (tag, parent) in expand_with_parent(tag) {
        writeln!(out, "{}", format_expansion(&tag, parent.as_deref()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
