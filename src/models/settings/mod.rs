// Settings module
// User preferences persisted as TOML

use crate::models::locale::Locale;
use crate::utils::date::format_date;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Theme selection; `System` follows the OS light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }
}

/// First column of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
    pub theme: ThemePreference,
    /// strftime pattern used on the trigger button
    pub date_format: String,
    pub week_start: WeekStart,
    pub show_outside_days: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::Es,
            theme: ThemePreference::Light,
            date_format: "%d/%m/%Y".to_string(),
            week_start: WeekStart::Sunday,
            show_outside_days: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        // Rendering a sample date catches both parse errors and time/offset fields.
        let sample = NaiveDate::from_ymd_opt(2000, 12, 31);
        let renders = sample.and_then(|d| format_date(d, &self.date_format)).is_some();
        if self.date_format.trim().is_empty() || !renders {
            return Err(SettingsError::InvalidDateFormat(self.date_format.clone()));
        }
        Ok(())
    }
}
