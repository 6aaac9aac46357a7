// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reporting periods.
//!
//! A [`Period`] is a closed calendar-date interval `[start, end]`, both ends
//! inclusive, with no time component. Every scoping and projection function
//! in this crate takes one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A closed reporting interval `[start, end]`, both dates inclusive.
///
/// Construction enforces `start <= end`; an inverted pair is a caller bug,
/// not a data condition, and is rejected with [`Error::InvalidPeriod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    /// Creates a period, rejecting inverted bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidPeriod { start, end });
        }
        Ok(Period { start, end })
    }

    /// First day of the period.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the period.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` falls within the period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every calendar date in the period, ascending.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|d| *d <= self.end)
            .collect()
    }
}

#[cfg(test)]
#[path = "period_tests.rs"]
mod tests;
