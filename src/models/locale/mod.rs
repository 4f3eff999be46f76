// Locale model
// Fixed month-name tables for the two supported languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Language used for month labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Human-readable name of the language, in that language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// Ordered month names, January first.
    pub fn month_names(&self) -> &'static [&'static str; 12] {
        match self {
            Locale::En => &MONTHS_EN,
            Locale::Es => &MONTHS_ES,
        }
    }

    /// Name of a 1-based month, or `None` outside 1..=12.
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        if !(1..=12).contains(&month) {
            return None;
        }
        self.month_names().get((month - 1) as usize).copied()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(Locale::En.month_name(0), None);
        assert_eq!(Locale::En.month_name(13), None);
        assert_eq!(Locale::En.month_name(1), Some("January"));
        assert_eq!(Locale::Es.month_name(12), Some("Diciembre"));
    }

    #[test]
    fn test_parse_locale_tags() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" ES ".parse::<Locale>().unwrap(), Locale::Es);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }
}
