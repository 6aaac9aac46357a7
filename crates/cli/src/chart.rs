// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chart data assembly.
//!
//! Turns a scoped issue list into per-date chart rows by grouping actual
//! progress by completion date and merging it with the business-day ideal
//! baseline. Burn-up totals track scope changes: an issue only counts
//! toward the total from its (corrected) creation date onward.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use bc_core::{ideal_burn_down, ideal_burn_up, Issue, Period};

/// One chart row: the ideal baseline and actual aggregates for a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// Ideal baseline value for this date (remaining for burn-down,
    /// completed for burn-up).
    pub planned: f64,
    /// Actual counterpart of `planned`.
    pub actual: f64,
    pub remaining: f64,
    pub completed: f64,
    pub total: f64,
    pub completed_issues: usize,
    pub total_issues: usize,
}

/// Weekly completed-points bucket, Monday-anchored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VelocityBucket {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub completed_points: f64,
    pub completed_issues: usize,
}

/// Burn-down rows: one per calendar date in the period. The total scope is
/// fixed at the full scoped set; actual remaining falls as completions
/// accumulate.
pub fn burn_down_rows(issues: &[Issue], period: &Period) -> Vec<ChartPoint> {
    let dates = period.days();
    let total: f64 = issues.iter().map(Issue::points).sum();
    let planned = ideal_burn_down(total, period, &dates);

    dates
        .iter()
        .zip(planned)
        .map(|(&date, planned)| {
            let completed = completed_points_by(issues, date);
            let remaining = total - completed;
            ChartPoint {
                date,
                planned,
                actual: remaining,
                remaining,
                completed,
                total,
                completed_issues: completed_issues_by(issues, date),
                total_issues: issues.len(),
            }
        })
        .collect()
}

/// Burn-up rows: one per calendar date in the period. Totals are
/// scope-aware, so mid-period additions raise both the total and the
/// baseline from their creation date onward.
pub fn burn_up_rows(issues: &[Issue], period: &Period) -> Vec<ChartPoint> {
    period
        .days()
        .into_iter()
        .map(|date| {
            let total = total_points_by(issues, date);
            let completed = completed_points_by(issues, date);
            let planned = ideal_burn_up(total, period, &[date])
                .into_iter()
                .next()
                .unwrap_or(0.0);
            ChartPoint {
                date,
                planned,
                actual: completed,
                remaining: total - completed,
                completed,
                total,
                completed_issues: completed_issues_by(issues, date),
                total_issues: issues.iter().filter(|i| in_scope_by(i, date)).count(),
            }
        })
        .collect()
}

/// Points completed up to and including `date`.
fn completed_points_by(issues: &[Issue], date: NaiveDate) -> f64 {
    issues
        .iter()
        .filter(|i| i.completed_on().map_or(false, |c| c <= date))
        .map(Issue::points)
        .sum()
}

/// Issues completed up to and including `date`.
fn completed_issues_by(issues: &[Issue], date: NaiveDate) -> usize {
    issues
        .iter()
        .filter(|i| i.completed_on().map_or(false, |c| c <= date))
        .count()
}

/// Points in scope as of `date`.
fn total_points_by(issues: &[Issue], date: NaiveDate) -> f64 {
    issues
        .iter()
        .filter(|i| in_scope_by(i, date))
        .map(Issue::points)
        .sum()
}

fn in_scope_by(issue: &Issue, date: NaiveDate) -> bool {
    issue.created_on() <= date
}

/// Completed points grouped into Monday-anchored weeks, most recent
/// `weeks` buckets in chronological order.
pub fn weekly_velocity(issues: &[Issue], weeks: usize) -> Vec<VelocityBucket> {
    let mut by_week: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for issue in issues {
        let Some(completed) = issue.completed_on() else {
            continue;
        };
        let week_start =
            completed - Days::new(u64::from(completed.weekday().num_days_from_monday()));
        let entry = by_week.entry(week_start).or_insert((0.0, 0));
        entry.0 += issue.points();
        entry.1 += 1;
    }

    let skip = by_week.len().saturating_sub(weeks);
    by_week
        .into_iter()
        .skip(skip)
        .map(|(week_start, (completed_points, completed_issues))| VelocityBucket {
            week_start,
            week_end: week_start + Days::new(6),
            completed_points,
            completed_issues,
        })
        .collect()
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
