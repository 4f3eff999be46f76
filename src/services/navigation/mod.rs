//! Month/year navigation for the calendar popover.
//!
//! `FocusedDate` decides which month the grid shows. The month and year
//! selectors derive a new value from the current one by replacing a single
//! field; the day is clamped to the target month so the result is always a
//! legal date (Jan 31 -> Feb 28/29, Feb 29 -> Feb 28 in common years).

use crate::models::locale::Locale;
use crate::models::select::SelectOption;
use crate::utils::date::{clamped_date, shift_month};
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Oldest year offered by the year selector.
pub const MIN_YEAR: i32 = 1901;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Invalid month selection: {0:?}")]
    InvalidMonth(String),
    #[error("Invalid year selection: {token:?} (allowed {min}..={max})")]
    InvalidYear { token: String, min: i32, max: i32 },
}

/// The date whose month the calendar grid displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FocusedDate(NaiveDate);

impl FocusedDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Same year, month replaced. `None` if `month` is outside 1..=12.
    pub fn with_month(&self, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        clamped_date(self.year(), month, self.0.day()).map(Self)
    }

    /// Same month, year replaced.
    pub fn with_year(&self, year: i32) -> Option<Self> {
        clamped_date(year, self.month(), self.0.day()).map(Self)
    }

    /// One month forward or back, used when grid navigation is enabled.
    pub fn shifted(&self, delta: i32) -> Self {
        Self(shift_month(self.0, delta))
    }

    /// Value token the month selector should show as selected.
    pub fn month_token(&self) -> String {
        self.month().to_string()
    }

    /// Value token the year selector should show as selected.
    pub fn year_token(&self) -> String {
        self.year().to_string()
    }
}

impl From<NaiveDate> for FocusedDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Twelve options labelled with the locale's month names, values "1".."12".
pub fn month_options(locale: Locale) -> Vec<SelectOption> {
    locale
        .month_names()
        .iter()
        .enumerate()
        .map(|(index, name)| SelectOption::new(*name, (index + 1).to_string()))
        .collect()
}

/// Years from `current_year` down to `MIN_YEAR`, most recent first.
pub fn year_options(current_year: i32) -> Vec<SelectOption> {
    (MIN_YEAR..=current_year)
        .rev()
        .map(|year| {
            let text = year.to_string();
            SelectOption::new(text.clone(), text)
        })
        .collect()
}

/// Month/year selector pair bound to one `FocusedDate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateNavigator {
    focused: FocusedDate,
    locale: Locale,
    current_year: i32,
}

impl DateNavigator {
    /// `today` seeds the focused month and caps the year range.
    pub fn new(today: NaiveDate, locale: Locale) -> Self {
        Self {
            focused: FocusedDate::new(today),
            locale,
            current_year: today.year(),
        }
    }

    pub fn focused(&self) -> FocusedDate {
        self.focused
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Changes month labels only; the focused date is untouched.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn month_options(&self) -> Vec<SelectOption> {
        month_options(self.locale)
    }

    pub fn year_options(&self) -> Vec<SelectOption> {
        year_options(self.current_year)
    }

    /// Apply a month selector value ("1".."12").
    pub fn select_month(&mut self, token: &str) -> Result<FocusedDate, NavigationError> {
        let next = token
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|month| self.focused.with_month(month))
            .ok_or_else(|| NavigationError::InvalidMonth(token.to_string()))?;

        log::debug!("Month selected: {} -> {}", self.focused.date(), next.date());
        self.focused = next;
        Ok(next)
    }

    /// Apply a year selector value within `MIN_YEAR..=current_year`.
    pub fn select_year(&mut self, token: &str) -> Result<FocusedDate, NavigationError> {
        let invalid = || NavigationError::InvalidYear {
            token: token.to_string(),
            min: MIN_YEAR,
            max: self.current_year,
        };

        let year = token.trim().parse::<i32>().map_err(|_| invalid())?;
        if !(MIN_YEAR..=self.current_year).contains(&year) {
            return Err(invalid());
        }
        let next = self.focused.with_year(year).ok_or_else(invalid)?;

        log::debug!("Year selected: {} -> {}", self.focused.date(), next.date());
        self.focused = next;
        Ok(next)
    }

    pub fn previous_month(&mut self) -> FocusedDate {
        self.focused = self.focused.shifted(-1);
        self.focused
    }

    pub fn next_month(&mut self) -> FocusedDate {
        self.focused = self.focused.shifted(1);
        self.focused
    }
}
