// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Optional configuration file.
//!
//! Configuration is read from `--config <path>` or `./timeline.toml` and
//! includes:
//! - `[search]`: defaults for the search flags (`tags`, `event_tags`,
//!   `date_start`, `date_end`); flags given on the command line win
//! - `[log]`: `level`, an `EnvFilter` directive used when neither
//!   `--verbose` nor `TL_LOG` is set

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use tl_core::{FilterCriteria, SearchParams};

use crate::cli::SearchArgs;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "timeline.toml";

/// Contents of `timeline.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub search: SearchDefaults,
    pub log: LogConfig,
}

/// Default search parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchDefaults {
    /// Document tag expression.
    pub tags: Option<String>,
    /// Event tags separated by `;`.
    pub event_tags: Option<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: Option<String>,
}

impl Config {
    /// Parse configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Find and load the configuration.
    ///
    /// An explicit path must exist. Without one, `timeline.toml` in `dir`
    /// is used if present, and defaults otherwise.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) if !path.is_file() => {
                Err(Error::ConfigNotFound(path.display().to_string()))
            }
            Some(path) => Self::load(path),
            None => {
                let path = dir.join(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

impl SearchDefaults {
    /// Combine the defaults with command-line flags, flags taking precedence.
    pub fn merge(&self, args: &SearchArgs) -> SearchParams {
        let pick = |flag: &Option<String>, default: &Option<String>| {
            flag.clone().or_else(|| default.clone())
        };
        SearchParams {
            tags: pick(&args.tags, &self.tags),
            criteria: FilterCriteria {
                event_tags: pick(&args.event_tags, &self.event_tags),
                date_start: pick(&args.date_start, &self.date_start),
                date_end: pick(&args.date_end, &self.date_end),
            },
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
