// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ideal progress lines.
//!
//! The baseline a burn chart compares actual progress against: the total
//! scope spread evenly over the period's business days, so weekends and
//! holidays hold the line flat. One value is produced per report date.
//! Values are not rounded; display precision is a caller concern.

use chrono::NaiveDate;

use crate::calendar::business_days_between;
use crate::period::Period;

/// Ideal remaining points per report date for a burn-down chart.
///
/// A period containing no business days yields the constant
/// `total_points` for every report date; there is nothing to burn.
/// Non-increasing over ascending report dates, never negative.
pub fn ideal_burn_down(
    total_points: f64,
    period: &Period,
    report_dates: &[NaiveDate],
) -> Vec<f64> {
    project(total_points, period, report_dates, |total, consumed| {
        (total - consumed).max(0.0)
    })
}

/// Ideal completed points per report date for a burn-up chart.
///
/// A period containing no business days yields the constant `0` for every
/// report date. Non-decreasing over ascending report dates, never above
/// `total_points`.
pub fn ideal_burn_up(total_points: f64, period: &Period, report_dates: &[NaiveDate]) -> Vec<f64> {
    project(total_points, period, report_dates, |total, consumed| {
        consumed.min(total)
    })
}

fn project<F>(total_points: f64, period: &Period, report_dates: &[NaiveDate], shape: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let working_days = business_days_between(period.start(), period.end());
    if working_days.is_empty() {
        let floor = shape(total_points, 0.0);
        return report_dates.iter().map(|_| floor).collect();
    }
    let per_day = total_points / working_days.len() as f64;

    report_dates
        .iter()
        .map(|date| {
            // Business days completed up to and including the report date.
            let elapsed = business_days_between(period.start(), *date).len();
            shape(total_points, elapsed as f64 * per_day)
        })
        .collect()
}

#[cfg(test)]
#[path = "ideal_tests.rs"]
mod tests;
