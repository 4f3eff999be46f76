// Property-based tests for month/year navigation
// Random focused dates and selections must always yield legal dates

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Datelike, NaiveDate};
use dob_picker::models::locale::Locale;
use dob_picker::services::navigation::{year_options, DateNavigator, FocusedDate, MIN_YEAR};
use dob_picker::utils::date::days_in_month;
use proptest::prelude::*;
use std::collections::HashSet;

fn focused_date() -> impl Strategy<Value = NaiveDate> {
    (MIN_YEAR..=2026i32, 1..=12u32, 1..=31u32).prop_map(|(year, month, day)| {
        let day = day.min(days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    })
}

proptest! {
    /// Property: selecting month m keeps the year and clamps the day
    #[test]
    fn prop_select_month_replaces_only_month(start in focused_date(), month in 1..=12u32) {
        let next = FocusedDate::new(start).with_month(month).unwrap();

        prop_assert_eq!(next.month(), month);
        prop_assert_eq!(next.year(), start.year());
        prop_assert_eq!(next.date().day(), start.day().min(days_in_month(start.year(), month)));
    }

    /// Property: selecting year y keeps the month and clamps the day
    #[test]
    fn prop_select_year_replaces_only_year(start in focused_date(), year in MIN_YEAR..=2026i32) {
        let next = FocusedDate::new(start).with_year(year).unwrap();

        prop_assert_eq!(next.year(), year);
        prop_assert_eq!(next.month(), start.month());
        prop_assert_eq!(next.date().day(), start.day().min(days_in_month(year, start.month())));
    }

    /// Property: year options are strictly descending, unique, and sized current - 1900
    #[test]
    fn prop_year_options_shape(current_year in MIN_YEAR..=2200i32) {
        let options = year_options(current_year);
        prop_assert_eq!(options.len(), (current_year - 1900) as usize);

        let years: Vec<i32> = options.iter().map(|o| o.value.parse().unwrap()).collect();
        prop_assert!(years.windows(2).all(|w| w[0] > w[1]));
        prop_assert_eq!(years.iter().collect::<HashSet<_>>().len(), years.len());
        prop_assert!(options.iter().all(|o| o.label == o.value));
    }

    /// Property: navigator tokens round-trip through the selectors
    #[test]
    fn prop_navigator_tokens_match_focus(month in 1..=12u32, year in MIN_YEAR..=2026i32) {
        let mut navigator = DateNavigator::new(fixtures::today(), Locale::En);
        navigator.select_year(&year.to_string()).unwrap();
        navigator.select_month(&month.to_string()).unwrap();

        prop_assert_eq!(navigator.focused().month_token(), month.to_string());
        prop_assert_eq!(navigator.focused().year_token(), year.to_string());
    }
}

#[test]
fn test_month_end_overflow_is_clamped() {
    let start = FocusedDate::new(fixtures::jan_31_2025());
    for month in 1..=12 {
        let next = start.with_month(month).unwrap();
        assert_eq!(next.date().day(), days_in_month(2025, month));
    }
}

#[test]
fn test_leap_day_year_change() {
    let start = FocusedDate::new(fixtures::leap_day_2024());
    assert_eq!(start.with_year(2025).unwrap().date().day(), 28);
    assert_eq!(start.with_year(2028).unwrap().date().day(), 29);
}
