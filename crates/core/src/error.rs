// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tl-core operations.

use thiserror::Error;

/// All possible errors that can occur in tl-core operations.
///
/// Unparsable dates are not errors: they degrade to an unknown bound.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid date range: start '{start}' is after end '{end}'\n  hint: swap the bounds or drop one of them")]
    InvalidRange { start: String, end: String },

    #[error("cannot combine {left} with {right}\n  hint: only values of the same unit family (distance or time) can be added")]
    TypeMismatch { left: String, right: String },

    #[error("unknown unit: '{0}'\n  hint: valid units are: mm, cm, m, km, sec, min, h, d, w, mo, yr")]
    UnknownUnit(String),

    #[error("invalid value: '{0}'\n  hint: expected a number followed by a unit, e.g. 5km or 40min")]
    InvalidValue(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tl-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
