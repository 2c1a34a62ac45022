//! Supported interface languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Language the user has chosen for the interface and for AI answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
    Fr,
    It,
    Zh,
}

impl Locale {
    /// Every supported locale, in menu order.
    pub const ALL: [Locale; 5] = [Locale::Es, Locale::En, Locale::Fr, Locale::It, Locale::Zh];

    /// Two-letter code persisted in the store.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::Zh => "zh",
        }
    }

    /// Name of the language in that language, for the switcher menu.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Es => "Español",
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::It => "Italiano",
            Locale::Zh => "中文",
        }
    }

    /// English name of the language, used to instruct the text model.
    pub fn language_name(&self) -> &'static str {
        match self {
            Locale::Es => "Spanish",
            Locale::En => "English",
            Locale::Fr => "French",
            Locale::It => "Italian",
            Locale::Zh => "Mandarin Chinese",
        }
    }

    /// Long date (year, full month name, day) in this locale's convention.
    pub fn format_long_date(&self, at: &Timestamp) -> String {
        let (pattern, locale) = match self {
            Locale::Es => ("%-d de %B de %Y", chrono::Locale::es_ES),
            Locale::En => ("%B %-d, %Y", chrono::Locale::en_US),
            Locale::Fr => ("%-d %B %Y", chrono::Locale::fr_FR),
            Locale::It => ("%-d %B %Y", chrono::Locale::it_IT),
            Locale::Zh => ("%Y年%-m月%-d日", chrono::Locale::zh_CN),
        };
        at.as_datetime().format_localized(pattern, locale).to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Locale::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| {
                ValidationError::invalid_format("locale", format!("unsupported code '{}'", s))
            })
    }
}
