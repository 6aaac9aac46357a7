// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scope-correction pipeline.
//!
//! Narrows a fetched issue list down to the set that belongs in a reporting
//! period, recording every removal with a reason code. Five ordered stages
//! run as pure functions over the survivors of the previous stage; the
//! first disqualifying stage wins and the issue never re-enters later
//! stages. The driver folds the stages and concatenates their exclusion
//! lists; no shared mutable state is threaded through.
//!
//! Stage order:
//! 1. quarter-tag membership against the period's overlapping quarters
//! 2. administrative board rows (templates, goals, explicit non-work)
//! 3. date repair (completed-before-created, creation clamped to period)
//! 4. completion date against the period boundary
//! 5. missing due date on completion-stage issues (configurable, see
//!    [`ScopeOptions`])

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveTime;

use crate::issue::{Issue, KanbanStatus};
use crate::period::Period;
use crate::quarter::{normalize_label, overlapping_quarters};

/// Why an issue was removed from (or flagged within) the scoped set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionReason {
    /// Quarter tag missing or outside the period's quarters.
    Quarter,
    /// Template board row.
    Template,
    /// Goal or announcement placeholder row.
    Goal,
    /// Explicitly marked as not real work.
    Unnecessary,
    /// Completed strictly before the period started.
    PrePeriod,
    /// Completed strictly after the period ended.
    PostPeriod,
    /// Completion-stage status without a due date.
    NoDueDate,
}

impl ExclusionReason {
    /// Returns the string representation used in output and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionReason::Quarter => "quarter",
            ExclusionReason::Template => "template",
            ExclusionReason::Goal => "goal",
            ExclusionReason::Unnecessary => "unnecessary",
            ExclusionReason::PrePeriod => "pre-period",
            ExclusionReason::PostPeriod => "post-period",
            ExclusionReason::NoDueDate => "no-due-date",
        }
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An issue removed by the pipeline, paired with the reason that removed
/// it. Each issue acquires at most one record per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExclusionRecord {
    pub issue: Issue,
    pub reason: ExclusionReason,
}

/// Pipeline configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeOptions {
    /// Keep completion-stage issues with no due date in the filtered set,
    /// surfacing them as warnings instead of exclusions. Off by default:
    /// the strict behavior treats them like every other removal.
    pub include_missing_due_date: bool,
}

/// Outcome of a pipeline run.
///
/// Invariant: every input issue lands in exactly one of `filtered` or
/// `excluded`, so `filtered.len() + excluded.len()` equals the input
/// length and no id appears in both. `warnings` is diagnostic only and
/// non-empty only when [`ScopeOptions::include_missing_due_date`] is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeFilterResult {
    pub filtered: Vec<Issue>,
    pub excluded: Vec<ExclusionRecord>,
    pub warnings: Vec<ExclusionRecord>,
}

/// Runs the five-stage scope pipeline over `issues` for `period`.
///
/// Total and deterministic: degenerate inputs (empty lists, periods with
/// no business days) flow through without error.
pub fn apply_scope_filters(
    issues: Vec<Issue>,
    period: &Period,
    options: &ScopeOptions,
) -> ScopeFilterResult {
    let targets: BTreeSet<String> = overlapping_quarters(period)
        .iter()
        .map(|q| q.to_string())
        .collect();

    let mut excluded = Vec::new();

    let (issues, dropped) = filter_by_quarter(issues, &targets);
    excluded.extend(dropped);

    let (issues, dropped) = filter_administrative(issues);
    excluded.extend(dropped);

    let issues = correct_dates(issues, period);

    let (issues, dropped) = filter_period_boundary(issues, period);
    excluded.extend(dropped);

    if options.include_missing_due_date {
        let warnings = issues
            .iter()
            .filter(|i| lacks_required_due_date(i))
            .map(|i| ExclusionRecord {
                issue: i.clone(),
                reason: ExclusionReason::NoDueDate,
            })
            .collect();
        ScopeFilterResult {
            filtered: issues,
            excluded,
            warnings,
        }
    } else {
        let (filtered, flagged) = flag_missing_due_date(issues);
        excluded.extend(flagged);
        ScopeFilterResult {
            filtered,
            excluded,
            warnings: Vec::new(),
        }
    }
}

/// Stage 1: quarter-tagged data from unrelated quarters must never
/// contaminate a period's report, even when the raw dates look plausible.
fn filter_by_quarter(
    issues: Vec<Issue>,
    targets: &BTreeSet<String>,
) -> (Vec<Issue>, Vec<ExclusionRecord>) {
    partition(issues, |issue| {
        let in_scope = issue
            .quarter
            .as_deref()
            .map(normalize_label)
            .is_some_and(|q| !q.is_empty() && targets.contains(q));
        if in_scope {
            None
        } else {
            Some(ExclusionReason::Quarter)
        }
    })
}

/// Stage 2: administrative board rows are never backlog items.
fn filter_administrative(issues: Vec<Issue>) -> (Vec<Issue>, Vec<ExclusionRecord>) {
    partition(issues, |issue| match issue.kanban_status {
        Some(KanbanStatus::Template) => Some(ExclusionReason::Template),
        Some(KanbanStatus::GoalAnnouncement) => Some(ExclusionReason::Goal),
        Some(KanbanStatus::Unnecessary) => Some(ExclusionReason::Unnecessary),
        _ => None,
    })
}

/// Stage 3: pure repair, no exclusions. Upstream data sometimes records a
/// completion earlier than the creation; the creation date is also clamped
/// into the period so early-created carryover work doesn't distort
/// per-date aggregation. Corrected copies flow onward.
fn correct_dates(issues: Vec<Issue>, period: &Period) -> Vec<Issue> {
    issues
        .into_iter()
        .map(|mut issue| {
            if let Some(completed) = issue.completed_at {
                if completed < issue.created_at {
                    issue.created_at = completed;
                }
            }
            if issue.created_on() < period.start() {
                issue.created_at = period.start().and_time(NaiveTime::MIN).and_utc();
            }
            issue
        })
        .collect()
}

/// Stage 4: completed work only counts inside the period. Open issues are
/// never excluded here regardless of their dates.
fn filter_period_boundary(
    issues: Vec<Issue>,
    period: &Period,
) -> (Vec<Issue>, Vec<ExclusionRecord>) {
    partition(issues, |issue| {
        let completed = issue.completed_on()?;
        if completed > period.end() {
            Some(ExclusionReason::PostPeriod)
        } else if completed < period.start() {
            Some(ExclusionReason::PrePeriod)
        } else {
            None
        }
    })
}

/// Stage 5, strict form: a completion-stage status with no due date is a
/// data-quality defect; the issue is excluded and surfaced for display.
fn flag_missing_due_date(issues: Vec<Issue>) -> (Vec<Issue>, Vec<ExclusionRecord>) {
    partition(issues, |issue| {
        if lacks_required_due_date(issue) {
            Some(ExclusionReason::NoDueDate)
        } else {
            None
        }
    })
}

fn lacks_required_due_date(issue: &Issue) -> bool {
    issue.due_date.is_none()
        && issue
            .kanban_status
            .as_ref()
            .is_some_and(|s| s.is_completion_stage())
}

/// Splits `issues` into survivors and exclusion records, preserving input
/// order in both halves.
fn partition<F>(issues: Vec<Issue>, mut disqualify: F) -> (Vec<Issue>, Vec<ExclusionRecord>)
where
    F: FnMut(&Issue) -> Option<ExclusionReason>,
{
    let mut kept = Vec::with_capacity(issues.len());
    let mut dropped = Vec::new();
    for issue in issues {
        match disqualify(&issue) {
            Some(reason) => dropped.push(ExclusionRecord { issue, reason }),
            None => kept.push(issue),
        }
    }
    (kept, dropped)
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
