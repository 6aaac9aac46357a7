// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `burnchart report` JSON output.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Serialize;

use super::PeriodJson;

/// JSON output structure for the report command.
#[derive(JsonSchema, Serialize)]
pub struct ReportOutputJson {
    /// Chart mode: `burn-down` or `burn-up`.
    pub mode: String,
    /// Reporting period the rows cover.
    pub period: PeriodJson,
    /// One row per calendar date in the period.
    pub rows: Vec<ChartPointJson>,
}

/// One chart row.
#[derive(JsonSchema, Serialize)]
pub struct ChartPointJson {
    /// Calendar date of the row.
    pub date: NaiveDate,
    /// Ideal baseline value for this date.
    pub planned: f64,
    /// Actual counterpart of `planned`.
    pub actual: f64,
    /// Points not yet completed.
    pub remaining: f64,
    /// Points completed up to and including this date.
    pub completed: f64,
    /// Total points in scope on this date.
    pub total: f64,
    /// Issues completed up to and including this date.
    pub completed_issues: usize,
    /// Issues in scope on this date.
    pub total_issues: usize,
}
