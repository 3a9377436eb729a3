// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    unknown_unit = { Error::UnknownUnit("parsec".into()), "parsec" },
    invalid_value = { Error::InvalidValue("fivekm".into()), "fivekm" },
    type_mismatch = {
        Error::TypeMismatch { left: "5km".into(), right: "3min".into() },
        "5km"
    },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_invalid_range_display() {
    let err = Error::InvalidRange {
        start: "2020".into(),
        end: "2019".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("2020"));
    assert!(msg.contains("2019"));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
