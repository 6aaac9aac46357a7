// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `burnchart velocity` JSON output.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Serialize;

/// JSON output structure for the velocity command.
#[derive(JsonSchema, Serialize)]
pub struct VelocityOutputJson {
    /// Number of most recent weeks requested.
    pub weeks: usize,
    /// Monday-anchored weekly buckets, chronological.
    pub buckets: Vec<VelocityBucketJson>,
}

/// One weekly completed-points bucket.
#[derive(JsonSchema, Serialize)]
pub struct VelocityBucketJson {
    /// Monday of the bucket's week.
    pub week_start: NaiveDate,
    /// Sunday of the bucket's week.
    pub week_end: NaiveDate,
    /// Points completed during the week.
    pub completed_points: f64,
    /// Issues completed during the week.
    pub completed_issues: usize,
}
