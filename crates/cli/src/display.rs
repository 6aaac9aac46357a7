// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for command output.

use bc_core::{ExclusionRecord, Issue, QuarterLabel};

use crate::chart::{ChartPoint, VelocityBucket};

/// Format chart rows as an aligned table.
pub fn format_chart_rows(rows: &[ChartPoint]) -> String {
    let mut lines = vec![format!(
        "{:<12} {:>8} {:>8} {:>10} {:>8}",
        "DATE", "PLANNED", "ACTUAL", "COMPLETED", "TOTAL"
    )];
    for row in rows {
        // chrono's Display ignores width flags, so pad the rendered date.
        let date = row.date.to_string();
        lines.push(format!(
            "{date:<12} {:>8.1} {:>8.1} {:>10.1} {:>8.1}",
            row.planned, row.actual, row.completed, row.total
        ));
    }
    lines.join("\n")
}

/// Format a single issue line for scope output.
pub fn format_issue_line(issue: &Issue) -> String {
    let points = issue.points();
    match &issue.kanban_status {
        Some(status) => format!("- #{} [{}] ({:.1}pt) {}", issue.iid, status, points, issue.title),
        None => format!("- #{} ({:.1}pt) {}", issue.iid, points, issue.title),
    }
}

/// Format an exclusion record with its reason code.
pub fn format_exclusion_line(record: &ExclusionRecord) -> String {
    match record.issue.completed_on() {
        Some(completed) => format!(
            "- #{} ({}) {} (completed {})",
            record.issue.iid, record.reason, record.issue.title, completed
        ),
        None => format!(
            "- #{} ({}) {}",
            record.issue.iid, record.reason, record.issue.title
        ),
    }
}

/// Format quarter labels one per line.
pub fn format_quarters(labels: &[QuarterLabel]) -> String {
    labels
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format velocity buckets as an aligned table.
pub fn format_velocity(buckets: &[VelocityBucket]) -> String {
    let mut lines = vec![format!(
        "{:<12} {:<12} {:>8} {:>8}",
        "WEEK START", "WEEK END", "POINTS", "ISSUES"
    )];
    for bucket in buckets {
        let start = bucket.week_start.to_string();
        let end = bucket.week_end.to_string();
        lines.push(format!(
            "{start:<12} {end:<12} {:>8.1} {:>8}",
            bucket.completed_points, bucket.completed_issues
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
