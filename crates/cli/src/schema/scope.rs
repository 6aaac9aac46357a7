// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `burnchart scope` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use super::{ExclusionRecordJson, IssueJson};

/// JSON output structure for the scope command.
#[derive(JsonSchema, Serialize)]
pub struct ScopeOutputJson {
    /// Issues that belong in the period's report.
    pub filtered: Vec<IssueJson>,
    /// Issues removed by the pipeline, with reason codes.
    pub excluded: Vec<ExclusionRecordJson>,
    /// Diagnostic records for issues kept despite a data-quality flag.
    pub warnings: Vec<ExclusionRecordJson>,
}
