// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "TL_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Choose the filter directive: `--verbose`, then `TL_LOG`, then the
/// configured level, then `warn`.
pub fn filter_directive(verbose: bool, env: Option<&str>, configured: Option<&str>) -> String {
    let non_blank = |s: &&str| !s.trim().is_empty();
    if verbose {
        return "debug".to_string();
    }
    env.filter(non_blank)
        .or(configured.filter(non_blank))
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

/// Install the global subscriber.
///
/// A subscriber already installed (e.g. by a test harness) is left alone.
pub fn init(verbose: bool, configured: Option<&str>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(verbose, env.as_deref(), configured);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| Error::Config(format!("invalid log level '{}': {}", directive, e)))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
