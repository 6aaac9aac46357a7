// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the burnchart reporting engine.
//!
//! This module contains the fundamental data types: Issue, State, and
//! KanbanStatus. Issues arrive from the tracker boundary as plain JSON
//! records and are read-only to the engine; the scope pipeline produces
//! corrected copies rather than mutating inputs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lifecycle state of an issue in the upstream tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Still open in the tracker.
    Opened,
    /// Closed in the tracker.
    Closed,
}

impl State {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Opened => "opened",
            State::Closed => "closed",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "opened" => Ok(State::Opened),
            "closed" => Ok(State::Closed),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

/// Workflow status from the tracker's kanban board.
///
/// The board mixes real work states with administrative rows. The
/// administrative sentinels and the two completion-stage statuses the
/// pipeline cares about are closed variants so that stage logic is checked
/// at compile time; everything else rides in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KanbanStatus {
    /// Template row used to stamp out new issues. Administrative.
    Template,
    /// Goal or announcement placeholder. Administrative.
    GoalAnnouncement,
    /// Explicitly marked as not real work. Administrative.
    Unnecessary,
    /// Work finished.
    Done,
    /// Work finished, awaiting handoff to the requester.
    AwaitingHandoff,
    /// Any other board column.
    Other(String),
}

const TEMPLATE_STATUS: &str = "#テンプレート";
const GOAL_STATUS: &str = "#ゴール/アナウンス";
const UNNECESSARY_STATUS: &str = "#不要";
const DONE_STATUS: &str = "完了";
const AWAITING_HANDOFF_STATUS: &str = "共有待ち";

impl KanbanStatus {
    /// Returns the board-column text as the tracker writes it.
    pub fn as_str(&self) -> &str {
        match self {
            KanbanStatus::Template => TEMPLATE_STATUS,
            KanbanStatus::GoalAnnouncement => GOAL_STATUS,
            KanbanStatus::Unnecessary => UNNECESSARY_STATUS,
            KanbanStatus::Done => DONE_STATUS,
            KanbanStatus::AwaitingHandoff => AWAITING_HANDOFF_STATUS,
            KanbanStatus::Other(s) => s,
        }
    }

    /// Returns true for administrative sentinel rows that never represent
    /// real backlog items.
    pub fn is_administrative(&self) -> bool {
        matches!(
            self,
            KanbanStatus::Template | KanbanStatus::GoalAnnouncement | KanbanStatus::Unnecessary
        )
    }

    /// Returns true for statuses that denote finished work and therefore
    /// require a due date.
    pub fn is_completion_stage(&self) -> bool {
        matches!(self, KanbanStatus::Done | KanbanStatus::AwaitingHandoff)
    }
}

impl From<String> for KanbanStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            TEMPLATE_STATUS => KanbanStatus::Template,
            GOAL_STATUS => KanbanStatus::GoalAnnouncement,
            UNNECESSARY_STATUS => KanbanStatus::Unnecessary,
            DONE_STATUS => KanbanStatus::Done,
            AWAITING_HANDOFF_STATUS => KanbanStatus::AwaitingHandoff,
            _ => KanbanStatus::Other(s),
        }
    }
}

impl From<KanbanStatus> for String {
    fn from(status: KanbanStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for KanbanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary entity: a tracker issue as fetched for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Tracker-global identifier.
    pub id: i64,
    /// Sequence number within the project.
    pub iid: i64,
    /// Short description of the work.
    pub title: String,
    /// Longer description providing context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lifecycle state in the tracker.
    pub state: State,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When work finished. Present only for completed issues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Committed delivery date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Story-point estimate. Treated as 0 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<f64>,
    /// Kanban board column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kanban_status: Option<KanbanStatus>,
    /// Fiscal-quarter label attached upstream, possibly `@`-prefixed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<String>,
    /// Milestone classification. Opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
    /// Assignee classification. Opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Service classification. Opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl Issue {
    /// Story points, with absent estimates counted as zero.
    pub fn points(&self) -> f64 {
        self.point.unwrap_or(0.0)
    }

    /// UTC calendar date work was created.
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// UTC calendar date work finished, if it has.
    pub fn completed_on(&self) -> Option<NaiveDate> {
        self.completed_at.map(|t| t.date_naive())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
