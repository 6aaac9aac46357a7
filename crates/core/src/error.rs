// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for bc-core operations.

use thiserror::Error;

/// All possible errors that can occur in bc-core operations.
///
/// The reporting core is total over its data inputs: degenerate periods,
/// missing fields, and data-quality anomalies are handled as values, never
/// thrown. The variants here represent caller or configuration bugs caught
/// at the ingestion boundary.
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
}

/// A specialized Result type for bc-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
