//! Pananggalan Domain - the Javanese calendar
//!
//! Converts between Gregorian dates and the lunar Javanese calendar
//! (Pananggalan Jawa), applies year/month/day deltas, and renders dates with
//! custom templates.
//!
//! ```ignore
//! use pananggalan_domain::{JavaneseDate, JavaneseDateDelta};
//!
//! let date = JavaneseDate::from_gregorian(1936, 3, 24)?;
//! assert_eq!(date.to_string(), "Selasa Pon, 1 Sura 1867");
//!
//! let later = date.checked_add(JavaneseDateDelta::days(30))?;
//! assert_eq!(later.format("%d %M %Y"), "1 Sapar 1867");
//! ```

pub mod date;
pub mod delta;
pub mod error;
pub mod format;
pub mod value_objects;

pub use date::{gregorian_epoch, JavaneseDate};
pub use delta::JavaneseDateDelta;
pub use error::DomainError;

// Re-export calendar tables and settings
pub use value_objects::{
    CalendarSettings, Dina, Pasaran, Sasi, Tahun, Weton, DATE_FORMAT_ENV_VAR, DAYS_IN_WINDU,
    DEFAULT_DATE_FORMAT, DINA_CYCLE, EPOCH_YEAR, PASARAN_CYCLE, SASI_IN_TAHUN, TAHUN_IN_WINDU,
};
