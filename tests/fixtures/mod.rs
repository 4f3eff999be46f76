// Test fixtures - reusable test data
// Provides consistent dates across test files

#![allow(dead_code)]

use chrono::NaiveDate;

/// Reference "today" used where tests need a fixed current date
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Jan 31, 2025: the longest-month end for overflow checks
pub fn jan_31_2025() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

/// Feb 29, 2024 (leap year)
pub fn leap_day_2024() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
}

/// A typical date of birth
pub fn birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
}
