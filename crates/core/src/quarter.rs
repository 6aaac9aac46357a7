// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fiscal-quarter mapping.
//!
//! The fiscal year begins in April: Q1 is April-June, Q2 July-September,
//! Q3 October-December, and Q4 January-March of the following calendar
//! year. Labels are written `FY{yy}Q{q}`; the upstream tracker prefixes
//! them with an `@` marker, which [`QuarterLabel::from_str`] and
//! [`normalize_label`] strip so labels from different sources compare
//! equal.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::period::Period;

/// Marker character the upstream tracker prepends to quarter labels.
pub const QUARTER_MARKER: char = '@';

/// A fiscal quarter, identified by fiscal year and quarter number (1-4).
///
/// Ordering is chronological, which coincides with lexicographic ordering
/// of the canonical `FY{yy}Q{q}` text within a century.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuarterLabel {
    fiscal_year: i32,
    quarter: u8,
}

impl QuarterLabel {
    /// The fiscal quarter containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        let month = date.month();
        let year = date.year();
        if month >= 4 {
            QuarterLabel {
                fiscal_year: year,
                quarter: ((month - 4) / 3) as u8 + 1,
            }
        } else {
            QuarterLabel {
                fiscal_year: year - 1,
                quarter: 4,
            }
        }
    }

    /// Full fiscal year, e.g. 2025 for `FY25Q2`.
    pub fn fiscal_year(&self) -> i32 {
        self.fiscal_year
    }

    /// Quarter number within the fiscal year, 1-4.
    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    /// First and last calendar day of the quarter's 3-month span.
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        let (start_year, start_month) = match self.quarter {
            1 => (self.fiscal_year, 4),
            2 => (self.fiscal_year, 7),
            3 => (self.fiscal_year, 10),
            _ => (self.fiscal_year + 1, 1),
        };
        let start = first_of_month(start_year, start_month);
        let (next_year, next_month) = add_months(start_year, start_month, 3);
        let end = first_of_month(next_year, next_month)
            .pred_opt()
            .unwrap_or(start);
        (start, end)
    }
}

impl fmt::Display for QuarterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FY{:02}Q{}",
            self.fiscal_year.rem_euclid(100),
            self.quarter
        )
    }
}

impl FromStr for QuarterLabel {
    type Err = Error;

    /// Parses `FY25Q2` or `@FY25Q2`. Two-digit fiscal years resolve to 20xx.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::InvalidQuarterLabel(s.to_string());
        let body = normalize_label(s);
        let rest = body.strip_prefix("FY").ok_or_else(bad)?;
        if rest.len() != 4 || !rest.is_ascii() {
            return Err(bad());
        }
        let (year_digits, quarter_part) = rest.split_at(2);
        if !year_digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(bad());
        }
        let year: u32 = year_digits.parse().map_err(|_| bad())?;
        let quarter: u8 = quarter_part
            .strip_prefix('Q')
            .ok_or_else(bad)?
            .parse()
            .map_err(|_| bad())?;
        if !(1..=4).contains(&quarter) {
            return Err(bad());
        }
        Ok(QuarterLabel {
            fiscal_year: 2000 + year as i32,
            quarter,
        })
    }
}

/// Strips the leading marker character, if present.
pub fn normalize_label(label: &str) -> &str {
    label.strip_prefix(QUARTER_MARKER).unwrap_or(label)
}

/// The distinct fiscal quarters the period's months touch, sorted
/// chronologically.
///
/// Walks month-by-month from the first day of the start month through the
/// end date. A period entirely within one month yields exactly one label,
/// regardless of how close it sits to a quarter boundary.
pub fn overlapping_quarters(period: &Period) -> Vec<QuarterLabel> {
    let mut quarters = BTreeSet::new();
    let mut year = period.start().year();
    let mut month = period.start().month();
    while first_of_month(year, month) <= period.end() {
        quarters.insert(QuarterLabel::from_date(first_of_month(year, month)));
        let (next_year, next_month) = add_months(year, month, 1);
        year = next_year;
        month = next_month;
    }
    quarters.into_iter().collect()
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Months are always in 1..=12 here; the fallback is unreachable for any
    // year chrono can represent.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn add_months(year: i32, month: u32, count: u32) -> (i32, u32) {
    let zero_based = month - 1 + count;
    (year + (zero_based / 12) as i32, zero_based % 12 + 1)
}

#[cfg(test)]
#[path = "quarter_tests.rs"]
mod tests;
