// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date arithmetic.

use chrono::{Datelike, Duration, NaiveDate};

/// Return the Monday on or before `date`.
///
/// Sunday is treated as the end of its week, so it maps back six days.
/// Idempotent: `week_start(week_start(d)) == week_start(d)`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let dow = i64::from(date.weekday().num_days_from_sunday()); // Sunday = 0
    let offset = if dow == 0 { -6 } else { 1 - dow };
    date + Duration::days(offset)
}

/// Whether two dates fall in the same calendar month and year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Days remaining in `date`'s month, not counting `date` itself.
pub fn days_left_in_month(date: NaiveDate) -> u32 {
    days_in_month(date) - date.day()
}

fn days_in_month(date: NaiveDate) -> u32 {
    match date.month() {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if date.leap_year() {
                29
            } else {
                28
            }
        }
    }
}
