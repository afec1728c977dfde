//! Tahun (windu year) table
//!
//! Years are named by their position in the eight-year windu cycle. Ehe, Dal
//! and Jimakir are leap years of 355 days; the rest have 354. A full windu is
//! therefore 2835 days.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cyclic::cyclic_lookup;
use crate::error::DomainError;

/// Number of years in a windu
pub const TAHUN_IN_WINDU: usize = 8;

/// Number of days in a windu (sum of the eight year lengths)
pub const DAYS_IN_WINDU: i64 = 2835;

/// First Javanese year of the epoch windu (an Alip year)
pub const EPOCH_YEAR: i32 = 1867;

/// A named year within the windu cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tahun {
    Alip,
    Ehe,
    Jimawal,
    Je,
    Dal,
    Be,
    Wawu,
    Jimakir,
}

impl Tahun {
    /// All years in windu order.
    pub const ALL: [Tahun; TAHUN_IN_WINDU] = [
        Tahun::Alip,
        Tahun::Ehe,
        Tahun::Jimawal,
        Tahun::Je,
        Tahun::Dal,
        Tahun::Be,
        Tahun::Wawu,
        Tahun::Jimakir,
    ];

    /// Returns the windu year for a 1-based, wrapping ordinal.
    pub fn from_ordinal(ordinal: i64) -> Self {
        cyclic_lookup(&Self::ALL, ordinal)
    }

    /// Returns the windu year a calendar year falls on (1867 is Alip).
    pub fn from_year(year: i32) -> Self {
        Self::from_ordinal(i64::from(year) - i64::from(EPOCH_YEAR) + 1)
    }

    /// Returns the 1-based position of this year in the windu.
    pub fn ordinal(&self) -> u8 {
        match self {
            Tahun::Alip => 1,
            Tahun::Ehe => 2,
            Tahun::Jimawal => 3,
            Tahun::Je => 4,
            Tahun::Dal => 5,
            Tahun::Be => 6,
            Tahun::Wawu => 7,
            Tahun::Jimakir => 8,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tahun::Alip => "Alip",
            Tahun::Ehe => "Ehe",
            Tahun::Jimawal => "Jimawal",
            Tahun::Je => "Je",
            Tahun::Dal => "Dal",
            Tahun::Be => "Be",
            Tahun::Wawu => "Wawu",
            Tahun::Jimakir => "Jimakir",
        }
    }

    /// Returns the number of days in this year (354, or 355 for leap years).
    pub fn days(&self) -> u16 {
        if self.is_leap() {
            355
        } else {
            354
        }
    }

    /// Returns `true` for the 355-day years (Ehe, Dal, Jimakir).
    pub fn is_leap(&self) -> bool {
        matches!(self, Tahun::Ehe | Tahun::Dal | Tahun::Jimakir)
    }
}

impl fmt::Display for Tahun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Tahun {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tahun| tahun.display_name().to_lowercase() == needle)
            .ok_or_else(|| DomainError::parse(format!("Unknown tahun: {}", s)))
    }
}
