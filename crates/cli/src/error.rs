// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the tlrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] tl_core::Error),

    #[error("empty tag expression")]
    TagExprEmpty,

    #[error("invalid tag expression at position {position}: {reason}")]
    TagExprSyntax { position: usize, reason: String },

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid document {path}: {source}")]
    Document {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized Result type for tlrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
