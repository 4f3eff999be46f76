// Date utility functions

use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

/// Get the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Build a date, pulling the day back to the last day of the month if needed.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Shift a date by the given number of months, clamping the day.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    clamped_date(new_year, new_month, date.day()).unwrap_or(date)
}

/// Render `date` with a strftime pattern. `None` if the pattern is malformed
/// or needs fields a plain date lacks (time of day, offset).
pub fn format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Completed years between `birth` and `on`. Feb 29 birthdays roll over on Mar 1
/// in common years. Returns 0 if `on` is before `birth`.
pub fn age_on(birth: NaiveDate, on: NaiveDate) -> u32 {
    if on <= birth {
        return 0;
    }
    let mut years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}
