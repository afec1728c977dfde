//! Dina (weekday) table and the weton pairing
//!
//! The seven-day week is counted continuously from the epoch, which fell on
//! Selasa (Tuesday). Pairing it with the five-day pasaran gives the weton, a
//! 35-day cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cyclic::cyclic_lookup;
use super::pasaran::Pasaran;
use crate::error::DomainError;

/// Length of the weekday cycle
pub const DINA_CYCLE: usize = 7;

/// A Javanese weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dina {
    Selasa,
    Rebo,
    Kemis,
    Jemah,
    Sebtu,
    Akad,
    Senen,
}

impl Dina {
    /// All weekdays, starting from the epoch's weekday.
    pub const ALL: [Dina; DINA_CYCLE] = [
        Dina::Selasa,
        Dina::Rebo,
        Dina::Kemis,
        Dina::Jemah,
        Dina::Sebtu,
        Dina::Akad,
        Dina::Senen,
    ];

    /// Returns the weekday for a 1-based, wrapping ordinal.
    pub fn from_ordinal(ordinal: i64) -> Self {
        cyclic_lookup(&Self::ALL, ordinal)
    }

    /// Returns the weekday of the given day offset from the epoch.
    pub fn from_days_from_epoch(days_from_epoch: i64) -> Self {
        Self::from_ordinal(days_from_epoch)
    }

    /// Returns the 1-based position of this weekday, counted from Selasa.
    pub fn ordinal(&self) -> u8 {
        match self {
            Dina::Selasa => 1,
            Dina::Rebo => 2,
            Dina::Kemis => 3,
            Dina::Jemah => 4,
            Dina::Sebtu => 5,
            Dina::Akad => 6,
            Dina::Senen => 7,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Dina::Selasa => "Selasa",
            Dina::Rebo => "Rebo",
            Dina::Kemis => "Kemis",
            Dina::Jemah => "Jemah",
            Dina::Sebtu => "Sebtu",
            Dina::Akad => "Akad",
            Dina::Senen => "Senen",
        }
    }
}

impl fmt::Display for Dina {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Dina {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|dina| dina.display_name().to_lowercase() == needle)
            .ok_or_else(|| DomainError::parse(format!("Unknown dina: {}", s)))
    }
}

// ============================================================================
// Weton
// ============================================================================

/// A weekday together with its market day (e.g. "Selasa Pon")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weton {
    pub dina: Dina,
    pub pasaran: Pasaran,
}

impl Weton {
    /// Returns the weton of the given day offset from the epoch.
    ///
    /// Both cycles are derived from the raw offset, so they run on across
    /// month and year boundaries.
    pub fn from_days_from_epoch(days_from_epoch: i64) -> Self {
        Self {
            dina: Dina::from_days_from_epoch(days_from_epoch),
            pasaran: Pasaran::from_days_from_epoch(days_from_epoch),
        }
    }
}

impl fmt::Display for Weton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dina, self.pasaran)
    }
}
