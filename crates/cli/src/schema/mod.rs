// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! These are separate from runtime types to allow schema-specific
//! annotations and to avoid adding schemars dependency to production
//! output paths.
//!
//! [`IssueJson`] and [`ExclusionRecordJson`] are shared across the scope
//! and report schemas. Other types exist purely for deriving JSON Schema
//! definitions via schemars.

// Allow unused fields - these types exist only for schema generation
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::Serialize;

pub mod report;
pub mod scope;
pub mod velocity;

/// JSON representation of a tracker issue.
#[derive(JsonSchema, Serialize)]
pub struct IssueJson {
    /// Tracker-global identifier.
    pub id: i64,
    /// Sequence number within the project.
    pub iid: i64,
    /// Short description of the work.
    pub title: String,
    /// Longer description providing context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lifecycle state in the tracker.
    pub state: StateJson,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When work finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Committed delivery date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Story-point estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<f64>,
    /// Kanban board column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kanban_status: Option<String>,
    /// Fiscal-quarter label attached upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarter: Option<String>,
    /// Milestone classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
    /// Assignee classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Service classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

/// Lifecycle state of an issue.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateJson {
    Opened,
    Closed,
}

/// Why an issue was removed from or flagged within the scoped set.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionReasonJson {
    Quarter,
    Template,
    Goal,
    Unnecessary,
    PrePeriod,
    PostPeriod,
    NoDueDate,
}

/// An excluded or flagged issue paired with its reason code.
#[derive(JsonSchema, Serialize)]
pub struct ExclusionRecordJson {
    /// The issue as it looked when the pipeline removed or flagged it.
    pub issue: IssueJson,
    /// Reason code.
    pub reason: ExclusionReasonJson,
}

/// A reporting period, both dates inclusive.
#[derive(JsonSchema, Serialize)]
pub struct PeriodJson {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
