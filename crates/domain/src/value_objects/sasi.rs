//! Sasi (lunar month) table
//!
//! Twelve months of alternating 30 and 29 days, 354 days in total. Leap
//! years (see [`Tahun`](super::Tahun)) gain their extra day at the end of
//! the year, so the month table itself never changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cyclic::cyclic_lookup;
use crate::error::DomainError;

/// Number of months in a Javanese year
pub const SASI_IN_TAHUN: usize = 12;

/// A Javanese lunar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sasi {
    Sura,
    Sapar,
    Mulud,
    BakdaMulud,
    Jumadilawal,
    Jumadilakir,
    Rejeb,
    Ruwah,
    Pasa,
    Sawal,
    Sela,
    Besar,
}

impl Sasi {
    /// All months in calendar order.
    pub const ALL: [Sasi; SASI_IN_TAHUN] = [
        Sasi::Sura,
        Sasi::Sapar,
        Sasi::Mulud,
        Sasi::BakdaMulud,
        Sasi::Jumadilawal,
        Sasi::Jumadilakir,
        Sasi::Rejeb,
        Sasi::Ruwah,
        Sasi::Pasa,
        Sasi::Sawal,
        Sasi::Sela,
        Sasi::Besar,
    ];

    /// Returns the month for a 1-based ordinal, wrapping out-of-range values
    /// (13 is Sura again, 0 is Besar).
    pub fn from_ordinal(ordinal: i64) -> Self {
        cyclic_lookup(&Self::ALL, ordinal)
    }

    /// Returns the 1-based position of this month in the year.
    pub fn ordinal(&self) -> u8 {
        match self {
            Sasi::Sura => 1,
            Sasi::Sapar => 2,
            Sasi::Mulud => 3,
            Sasi::BakdaMulud => 4,
            Sasi::Jumadilawal => 5,
            Sasi::Jumadilakir => 6,
            Sasi::Rejeb => 7,
            Sasi::Ruwah => 8,
            Sasi::Pasa => 9,
            Sasi::Sawal => 10,
            Sasi::Sela => 11,
            Sasi::Besar => 12,
        }
    }

    /// Returns the display name for this month.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sasi::Sura => "Sura",
            Sasi::Sapar => "Sapar",
            Sasi::Mulud => "Mulud",
            Sasi::BakdaMulud => "Bakda Mulud",
            Sasi::Jumadilawal => "Jumadilawal",
            Sasi::Jumadilakir => "Jumadilakir",
            Sasi::Rejeb => "Rejeb",
            Sasi::Ruwah => "Ruwah",
            Sasi::Pasa => "Pasa",
            Sasi::Sawal => "Sawal",
            Sasi::Sela => "Séla",
            Sasi::Besar => "Besar",
        }
    }

    /// Returns the alternative names this month is known by.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Sasi::Mulud => &["Rabingulawal"],
            Sasi::BakdaMulud => &["Rabingulakir"],
            Sasi::Ruwah => &["Arwah", "Saban"],
            Sasi::Pasa => &["Puwasa", "Siyam", "Ramelan"],
            Sasi::Sela => &["Dulkangidah"],
            Sasi::Besar => &["Dulkahijjah"],
            _ => &[],
        }
    }

    /// Returns the number of days in this month (30 for odd ordinals, 29 for even).
    pub fn days(&self) -> u16 {
        if self.ordinal() % 2 == 1 {
            30
        } else {
            29
        }
    }

    /// Total days of the months strictly before this one in the year.
    pub(crate) fn days_before(&self) -> i64 {
        Self::ALL[..usize::from(self.ordinal() - 1)]
            .iter()
            .map(|s| i64::from(s.days()))
            .sum()
    }
}

impl fmt::Display for Sasi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Sasi {
    type Err = DomainError;

    /// Accepts the display name, an alias, or the ASCII spelling "Sela",
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sasi| {
                sasi.display_name().to_lowercase() == needle
                    || sasi.aliases().iter().any(|a| a.to_lowercase() == needle)
                    || (*sasi == Sasi::Sela && needle == "sela")
            })
            .ok_or_else(|| DomainError::parse(format!("Unknown sasi: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_contiguous() {
        for (idx, sasi) in Sasi::ALL.iter().enumerate() {
            assert_eq!(usize::from(sasi.ordinal()), idx + 1);
        }
    }

    #[test]
    fn days_alternate_and_sum_to_354() {
        let days: Vec<u16> = Sasi::ALL.iter().map(Sasi::days).collect();
        assert_eq!(days, vec![30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]);
        assert_eq!(days.iter().map(|d| u32::from(*d)).sum::<u32>(), 354);
    }

    #[test]
    fn from_ordinal_wraps() {
        assert_eq!(Sasi::from_ordinal(1), Sasi::Sura);
        assert_eq!(Sasi::from_ordinal(12), Sasi::Besar);
        assert_eq!(Sasi::from_ordinal(13), Sasi::Sura);
        assert_eq!(Sasi::from_ordinal(0), Sasi::Besar);
        assert_eq!(Sasi::from_ordinal(-1), Sasi::Sela);
    }

    #[test]
    fn days_before() {
        assert_eq!(Sasi::Sura.days_before(), 0);
        assert_eq!(Sasi::Sapar.days_before(), 30);
        assert_eq!(Sasi::Mulud.days_before(), 59);
        assert_eq!(Sasi::Besar.days_before(), 325);
    }

    #[test]
    fn aliases() {
        assert_eq!(Sasi::Pasa.aliases(), &["Puwasa", "Siyam", "Ramelan"]);
        assert!(Sasi::Sura.aliases().is_empty());
    }

    #[test]
    fn display_trait() {
        assert_eq!(Sasi::BakdaMulud.to_string(), "Bakda Mulud");
        assert_eq!(Sasi::Sela.to_string(), "Séla");
    }

    #[test]
    fn parse_by_name_and_alias() {
        assert_eq!("sura".parse::<Sasi>().unwrap(), Sasi::Sura);
        assert_eq!("Bakda Mulud".parse::<Sasi>().unwrap(), Sasi::BakdaMulud);
        assert_eq!("Ramelan".parse::<Sasi>().unwrap(), Sasi::Pasa);
        assert_eq!("SÉLA".parse::<Sasi>().unwrap(), Sasi::Sela);
        assert_eq!("sela".parse::<Sasi>().unwrap(), Sasi::Sela);
    }

    #[test]
    fn parse_unknown_rejected() {
        let err = "Januari".parse::<Sasi>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("Januari"));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Sasi::BakdaMulud).unwrap();
        assert_eq!(json, "\"bakda_mulud\"");
        let back: Sasi = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Sasi::BakdaMulud);
    }
}
