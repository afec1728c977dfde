//! Template formatting for Javanese dates
//!
//! Templates use `%`-prefixed single-letter placeholders:
//!
//! | Placeholder | Output | Example |
//! |-------------|--------|---------|
//! | `%d` | day of month | `1` |
//! | `%D` | weekday name | `Selasa` |
//! | `%m` | month number | `1` |
//! | `%M` | month name | `Sura` |
//! | `%y` | 2-digit year | `67` |
//! | `%Y` | 4-digit year | `1867` |
//! | `%t` | windu year name | `Alip` |
//! | `%P` | market day name | `Pon` |
//! | `%p` | market day number | `1` |
//!
//! Any other character, including braces and a `%` that does not start a
//! placeholder, is copied through unchanged. A doubled `%%` is copied as is
//! and never starts a placeholder.

use crate::date::JavaneseDate;
use crate::value_objects::{CalendarSettings, DEFAULT_DATE_FORMAT};

impl JavaneseDate {
    /// Render this date with a custom template.
    pub fn format(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            let Some(&spec) = chars.peek() else {
                out.push('%');
                break;
            };
            let rendered = match spec {
                'd' => self.day().to_string(),
                'D' => self.dina().display_name().to_string(),
                'm' => self.sasi().ordinal().to_string(),
                'M' => self.sasi().display_name().to_string(),
                'y' => format!("{:02}", self.year().rem_euclid(100)),
                'Y' => self.year().to_string(),
                't' => self.tahun().display_name().to_string(),
                'P' => self.pasaran().display_name().to_string(),
                'p' => self.pasaran().ordinal().to_string(),
                '%' => "%%".to_string(),
                _ => {
                    out.push('%');
                    continue;
                }
            };
            out.push_str(&rendered);
            chars.next();
        }

        out
    }

    /// Render this date with the configured date format.
    pub fn format_with(&self, settings: &CalendarSettings) -> String {
        self.format(&settings.date_format)
    }

    /// Render this date with the default template, `"%D %P, %d %M %Y"`.
    pub fn format_default(&self) -> String {
        self.format(DEFAULT_DATE_FORMAT)
    }
}
