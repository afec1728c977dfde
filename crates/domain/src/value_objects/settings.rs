//! Calendar settings value object
//!
//! Settings carry serde derives so an embedding application can load them
//! from its own configuration files. Missing fields fall back to the
//! defaults below.

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the default date format
pub const DATE_FORMAT_ENV_VAR: &str = "PANANGGALAN_DATE_FORMAT";

/// Template used when no other format is configured ("Selasa Pon, 1 Sura 1867")
pub const DEFAULT_DATE_FORMAT: &str = "%D %P, %d %M %Y";

/// Configurable calendar settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarSettings {
    /// Template used by `JavaneseDate::format_with` and `Display`-like output
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl CalendarSettings {
    /// Load settings from the environment.
    ///
    /// `PANANGGALAN_DATE_FORMAT` overrides the date format; an unset or blank
    /// variable keeps the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let date_format = lookup(DATE_FORMAT_ENV_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(default_date_format);
        tracing::debug!(date_format = %date_format, "Loaded calendar settings");
        Self { date_format }
    }

    /// Replace the date format.
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }
}
