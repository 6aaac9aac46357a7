// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Business-day calendar.
//!
//! A business day is a weekday that is not a Japanese national holiday.
//! Holidays are computed from the statutory rules rather than a bundled
//! dataset: fixed dates, Happy Monday holidays, the equinox approximation
//! (valid through 2099), substitute holidays, citizens' holidays, and the
//! one-off 2020/2021 date moves. The ruleset matches the law in force since
//! 2020; earlier years are best-effort.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true if `date` is a business day: not a Saturday or Sunday and
/// not a national holiday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !is_weekend(date) && !is_holiday(date)
}

/// All business days `d` with `start <= d <= end`, ascending.
///
/// An inverted range is not an error; it yields an empty sequence.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_business_day(*d))
        .collect()
}

/// Returns true if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true if `date` is a national holiday, including substitute and
/// citizens' holidays.
pub fn is_holiday(date: NaiveDate) -> bool {
    is_statutory_holiday(date) || is_substitute_holiday(date) || is_citizens_holiday(date)
}

/// Statutory holidays only: the named holidays, before the substitute and
/// citizens' extension rules are applied.
fn is_statutory_holiday(date: NaiveDate) -> bool {
    let year = date.year();
    match (date.month(), date.day()) {
        // New Year's Day
        (1, 1) => return true,
        // National Foundation Day
        (2, 11) => return true,
        // Emperor's Birthday (current era)
        (2, 23) if year >= 2020 => return true,
        // Showa Day
        (4, 29) => return true,
        // Constitution Day, Greenery Day, Children's Day
        (5, 3) | (5, 4) | (5, 5) => return true,
        // Mountain Day; moved for the Tokyo Olympics in 2020/2021
        (8, 11) if year >= 2016 && year != 2020 && year != 2021 => return true,
        // Culture Day, Labor Thanksgiving Day
        (11, 3) | (11, 23) => return true,
        _ => {}
    }

    if date.month() == 3 && date.day() == vernal_equinox_day(year) {
        return true;
    }
    if date.month() == 9 && date.day() == autumnal_equinox_day(year) {
        return true;
    }

    // Happy Monday holidays: Coming of Age Day, Marine Day, Respect for the
    // Aged Day, Sports Day. Marine Day and Sports Day were moved to pinned
    // dates around the Olympics.
    if is_nth_monday(date, 1, 2) {
        return true;
    }
    if year != 2020 && year != 2021 && is_nth_monday(date, 7, 3) {
        return true;
    }
    if is_nth_monday(date, 9, 3) {
        return true;
    }
    if year != 2020 && year != 2021 && is_nth_monday(date, 10, 2) {
        return true;
    }

    matches!(
        (year, date.month(), date.day()),
        (2020, 7, 23) | (2020, 7, 24) | (2020, 8, 10) | (2021, 7, 22) | (2021, 7, 23) | (2021, 8, 8)
    )
}

/// Substitute holiday: when a statutory holiday falls on a Sunday, the next
/// day that is not itself a statutory holiday is observed instead.
fn is_substitute_holiday(date: NaiveDate) -> bool {
    if is_statutory_holiday(date) {
        return false;
    }
    let mut prev = date.pred_opt();
    while let Some(p) = prev {
        if !is_statutory_holiday(p) {
            return false;
        }
        if p.weekday() == Weekday::Sun {
            return true;
        }
        prev = p.pred_opt();
    }
    false
}

/// Citizens' holiday: a non-Sunday sandwiched between two statutory
/// holidays (the Silver Week Tuesday case).
fn is_citizens_holiday(date: NaiveDate) -> bool {
    if is_statutory_holiday(date) || date.weekday() == Weekday::Sun {
        return false;
    }
    match (date.pred_opt(), date.succ_opt()) {
        (Some(prev), Some(next)) => is_statutory_holiday(prev) && is_statutory_holiday(next),
        _ => false,
    }
}

fn is_nth_monday(date: NaiveDate, month: u32, n: u8) -> bool {
    date.month() == month
        && NaiveDate::from_weekday_of_month_opt(date.year(), month, Weekday::Mon, n)
            == Some(date)
}

/// Day of month for the vernal equinox. Approximation valid 1980-2099.
fn vernal_equinox_day(year: i32) -> u32 {
    equinox_day(year, 20.8431)
}

/// Day of month for the autumnal equinox. Approximation valid 1980-2099.
fn autumnal_equinox_day(year: i32) -> u32 {
    equinox_day(year, 23.2488)
}

fn equinox_day(year: i32, base: f64) -> u32 {
    let offset = f64::from(year - 1980);
    let day = (base + 0.242_194 * offset).floor() as i64 - i64::from((year - 1980) / 4);
    day.clamp(1, 31) as u32
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
