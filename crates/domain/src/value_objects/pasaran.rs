//! Pasaran (market day) table
//!
//! The five-day market week runs independently of the seven-day week. The
//! epoch (day offset 1) falls on Pon.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cyclic::cyclic_lookup;
use crate::error::DomainError;

/// Length of the market-day cycle
pub const PASARAN_CYCLE: usize = 5;

/// A Javanese market day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pasaran {
    Pon,
    Wage,
    Kliwon,
    Legi,
    Pahing,
}

impl Pasaran {
    /// All market days, starting from the epoch's market day.
    pub const ALL: [Pasaran; PASARAN_CYCLE] = [
        Pasaran::Pon,
        Pasaran::Wage,
        Pasaran::Kliwon,
        Pasaran::Legi,
        Pasaran::Pahing,
    ];

    /// Returns the market day for a 1-based, wrapping ordinal.
    pub fn from_ordinal(ordinal: i64) -> Self {
        cyclic_lookup(&Self::ALL, ordinal)
    }

    /// Returns the market day of the given day offset from the epoch.
    pub fn from_days_from_epoch(days_from_epoch: i64) -> Self {
        Self::from_ordinal(days_from_epoch)
    }

    /// Returns the 1-based position of this market day in the cycle.
    pub fn ordinal(&self) -> u8 {
        match self {
            Pasaran::Pon => 1,
            Pasaran::Wage => 2,
            Pasaran::Kliwon => 3,
            Pasaran::Legi => 4,
            Pasaran::Pahing => 5,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pasaran::Pon => "Pon",
            Pasaran::Wage => "Wage",
            Pasaran::Kliwon => "Kliwon",
            Pasaran::Legi => "Legi",
            Pasaran::Pahing => "Pahing",
        }
    }
}

impl fmt::Display for Pasaran {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Pasaran {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pon" => Ok(Pasaran::Pon),
            "wage" => Ok(Pasaran::Wage),
            "kliwon" => Ok(Pasaran::Kliwon),
            "legi" => Ok(Pasaran::Legi),
            "pahing" => Ok(Pasaran::Pahing),
            _ => Err(DomainError::parse(format!("Unknown pasaran: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_pon() {
        assert_eq!(Pasaran::from_days_from_epoch(1), Pasaran::Pon);
    }

    #[test]
    fn offset_zero_is_pahing() {
        assert_eq!(Pasaran::from_days_from_epoch(0), Pasaran::Pahing);
    }

    #[test]
    fn cycle_repeats_every_five_days() {
        for offset in 1..=40 {
            for k in 0..4 {
                assert_eq!(
                    Pasaran::from_days_from_epoch(offset),
                    Pasaran::from_days_from_epoch(offset + 5 * k),
                    "offset {offset}, k {k}"
                );
            }
        }
    }

    #[test]
    fn ordinals_match_table_order() {
        for (idx, pasaran) in Pasaran::ALL.iter().enumerate() {
            assert_eq!(usize::from(pasaran.ordinal()), idx + 1);
            assert_eq!(Pasaran::from_ordinal(idx as i64 + 1), *pasaran);
        }
    }

    #[test]
    fn parse_round_trips_display() {
        for pasaran in Pasaran::ALL {
            assert_eq!(pasaran.to_string().parse::<Pasaran>().unwrap(), pasaran);
        }
        assert!("Senin".parse::<Pasaran>().is_err());
    }
}
