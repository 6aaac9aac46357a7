// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! Configuration is stored in `burnchart.toml` in the working directory (or
//! a file named with `--config`) and carries defaults that command-line
//! flags override:
//! - `[scope] include_missing_due_date`: keep flagged done-without-due-date
//!   issues in the filtered set
//! - `[output] format`: default output format (`text` or `json`)

use std::fs;
use std::path::Path;

use bc_core::ScopeOptions;
use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "burnchart.toml";

/// Configuration read from `burnchart.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scope: ScopeConfig,
    pub output: OutputConfig,
}

/// `[scope]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeConfig {
    /// Keep completion-stage issues that lack a due date, surfacing them
    /// as warnings instead of excluding them.
    pub include_missing_due_date: bool,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format when a command has no `--format` flag.
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Loads configuration from a specific file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Loads the explicit config file if given, otherwise `burnchart.toml`
    /// from the working directory if present, otherwise defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::load(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Scope pipeline options, with the command-line flag taking
    /// precedence when set.
    pub fn scope_options(&self, include_missing_due_date_flag: bool) -> ScopeOptions {
        ScopeOptions {
            include_missing_due_date: include_missing_due_date_flag
                || self.scope.include_missing_due_date,
        }
    }

    /// Output format resolution: flag over config over the default.
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output.format).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
