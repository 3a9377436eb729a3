// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    nested = { "#hello/i/am", "#hello/i/am\t#hello/i\n#hello/i\t#hello\n#hello\t-\n" },
    flat = { "solo", "solo\t-\n" },
    blank = { "   ", "" },
)]
fn expansion(tag: &str, expected: &str) {
    let mut out = Vec::new();
    run_impl(tag, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
