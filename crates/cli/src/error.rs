// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the bcrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid quarter label: '{0}'\n  hint: expected the form FY25Q2, optionally prefixed with '@'")]
    InvalidQuarterLabel(String),

    #[error("invalid period: start {start} is after end {end}")]
    InvalidPeriod {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("invalid issue state: '{0}'\n  hint: valid states are: opened, closed")]
    InvalidState(String),

    #[error("a period is required\n  hint: pass --from and --to, or --range with a quarter label")]
    PeriodRequired,

    #[error("failed to read input file {path}: {reason}")]
    InputUnreadable { path: String, reason: String },

    #[error("failed to parse input file {path}: {reason}\n  hint: the input must be a JSON array of issues")]
    InputMalformed { path: String, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for bcrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<bc_core::Error> for Error {
    fn from(e: bc_core::Error) -> Self {
        match e {
            bc_core::Error::InvalidQuarterLabel(label) => Error::InvalidQuarterLabel(label),
            bc_core::Error::InvalidPeriod { start, end } => Error::InvalidPeriod { start, end },
            bc_core::Error::InvalidState(state) => Error::InvalidState(state),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
