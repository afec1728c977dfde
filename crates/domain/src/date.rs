//! Javanese date and its conversions
//!
//! A [`JavaneseDate`] is anchored on a day offset from the epoch: Gregorian
//! 1936-03-24 is offset 1 and corresponds to Selasa Pon, 1 Sura 1867 (Alip).
//! The year, month, day, weekday and market day are all derived from that
//! offset, so the offset is the only value arithmetic ever touches.
//!
//! Key operations:
//! - `JavaneseDate::to_days_from_epoch` - (year, month, day) to day offset
//! - `JavaneseDate::from_days_from_epoch` - day offset to a full date
//! - `JavaneseDate::from_gregorian` / `JavaneseDate::to_gregorian` - interop
//!   with `chrono::NaiveDate`

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::{
    Dina, Pasaran, Sasi, Tahun, Weton, DAYS_IN_WINDU, EPOCH_YEAR, SASI_IN_TAHUN, TAHUN_IN_WINDU,
};

/// Upper bound used when peeling whole years off a windu remainder.
///
/// This is the longest year length, not the length of the year being
/// peeled, so a 354-day year can end on day 355.
const YEAR_OVERSHOOT_BOUND: i64 = 355;

/// Upper bound used when peeling whole months off a year remainder.
const MONTH_OVERSHOOT_BOUND: i64 = 30;

/// Gregorian date of day offset 1.
pub fn gregorian_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1936, 3, 24).expect("1936-03-24 is a valid Gregorian date")
}

// ============================================================================
// JavaneseDate
// ============================================================================

/// A date in the Javanese calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct JavaneseDate {
    /// Calendar year (1867 or later)
    year: i32,
    /// Name of the year within its windu
    tahun: Tahun,
    /// Month
    sasi: Sasi,
    /// Day of month; 0 is only reachable through `JavaneseDate::new`
    day: u16,
    dina: Dina,
    pasaran: Pasaran,
    /// Authoritative day offset (epoch = 1)
    days_from_epoch: i64,
}

impl JavaneseDate {
    /// Create a date from a Javanese (year, month, day) triple.
    ///
    /// The month and day are kept as given; weekday and market day are taken
    /// from the resulting day offset. A day of 0 is accepted and means "the
    /// day before day 1 of the month".
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidYear` if `year` is before 1867
    /// - `DomainError::InvalidArgument` if `month` is not in 1..=12
    pub fn new(year: i32, month: u8, day: u16) -> Result<Self, DomainError> {
        let days_from_epoch = Self::to_days_from_epoch(year, month, day)?;
        let weton = Weton::from_days_from_epoch(days_from_epoch);

        Ok(Self {
            year,
            tahun: Tahun::from_year(year),
            sasi: Sasi::from_ordinal(i64::from(month)),
            day,
            dina: weton.dina,
            pasaran: weton.pasaran,
            days_from_epoch,
        })
    }

    /// Returns the first day of the epoch: Selasa Pon, 1 Sura 1867.
    pub fn epoch() -> Self {
        Self {
            year: EPOCH_YEAR,
            tahun: Tahun::Alip,
            sasi: Sasi::Sura,
            day: 1,
            dina: Dina::Selasa,
            pasaran: Pasaran::Pon,
            days_from_epoch: 1,
        }
    }

    /// Calculate the day offset from the epoch for a (year, month, day) triple.
    ///
    /// Whole windu contribute 2835 days each, then the years before `year`
    /// within its windu, then the months before `month`, then `day`.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidYear` if `year` is before 1867
    /// - `DomainError::InvalidArgument` if `month` is not in 1..=12
    pub fn to_days_from_epoch(year: i32, month: u8, day: u16) -> Result<i64, DomainError> {
        if year < EPOCH_YEAR {
            return Err(DomainError::invalid_year(year));
        }
        if !(1..=SASI_IN_TAHUN as u8).contains(&month) {
            return Err(DomainError::invalid_argument(format!(
                "month must be within 1..=12, got {}",
                month
            )));
        }

        let elapsed_years = i64::from(year) - i64::from(EPOCH_YEAR);
        let windu_count = elapsed_years / TAHUN_IN_WINDU as i64;
        let year_in_windu = (elapsed_years % TAHUN_IN_WINDU as i64) as usize;

        let tahun_days: i64 = Tahun::ALL[..year_in_windu]
            .iter()
            .map(|t| i64::from(t.days()))
            .sum();
        let sasi_days = Sasi::from_ordinal(i64::from(month)).days_before();

        Ok(windu_count * DAYS_IN_WINDU + tahun_days + sasi_days + i64::from(day))
    }

    /// Reconstruct a date from its day offset.
    ///
    /// Whole years are peeled off the windu remainder while more than 355
    /// days are left, then whole months while more than 30 are left; what
    /// remains is the day of month. Weekday and market day come straight
    /// from the offset.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidArgument` if `days_from_epoch` is zero or negative
    /// - `DomainError::OutOfRange` if the resulting year does not fit an `i32`
    pub fn from_days_from_epoch(days_from_epoch: i64) -> Result<Self, DomainError> {
        if days_from_epoch <= 0 {
            return Err(DomainError::invalid_argument(format!(
                "day offset from epoch must be positive, got {}",
                days_from_epoch
            )));
        }

        let windu = days_from_epoch / DAYS_IN_WINDU;
        let mut remaining = days_from_epoch % DAYS_IN_WINDU;

        let mut tahun_ordinal: i64 = 1;
        while remaining > YEAR_OVERSHOOT_BOUND {
            remaining -= i64::from(Tahun::from_ordinal(tahun_ordinal).days());
            tahun_ordinal += 1;
        }

        let mut sasi_ordinal: i64 = 1;
        while remaining > MONTH_OVERSHOOT_BOUND {
            remaining -= i64::from(Sasi::from_ordinal(sasi_ordinal).days());
            sasi_ordinal += 1;
        }

        let year = i64::from(EPOCH_YEAR) - 1 + windu * TAHUN_IN_WINDU as i64 + tahun_ordinal;
        let year = i32::try_from(year).map_err(|_| {
            DomainError::out_of_range(format!(
                "year {} for day offset {} does not fit in i32",
                year, days_from_epoch
            ))
        })?;
        let weton = Weton::from_days_from_epoch(days_from_epoch);

        Ok(Self {
            year,
            tahun: Tahun::from_ordinal(tahun_ordinal),
            sasi: Sasi::from_ordinal(sasi_ordinal),
            // Both loops stop with 0 <= remaining <= 30
            day: remaining as u16,
            dina: weton.dina,
            pasaran: weton.pasaran,
            days_from_epoch,
        })
    }

    /// Convert a Gregorian (year, month, day) triple to a Javanese date.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidGregorianDate` if the triple is not a real date
    /// - `DomainError::InvalidArgument` if the date is before 1936-03-24
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DomainError::invalid_gregorian_date(year, month, day))?;
        Self::from_naive_date(date)
    }

    /// Convert a `chrono::NaiveDate` to a Javanese date.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidArgument` if the date is before 1936-03-24
    pub fn from_naive_date(date: NaiveDate) -> Result<Self, DomainError> {
        let days_from_epoch = date.signed_duration_since(gregorian_epoch()).num_days() + 1;
        tracing::debug!(%date, days_from_epoch, "Converting Gregorian date");
        Self::from_days_from_epoch(days_from_epoch)
    }

    /// Convert this date back to the Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if the date lies beyond the range
    /// `chrono::NaiveDate` can represent.
    pub fn to_gregorian(&self) -> Result<NaiveDate, DomainError> {
        Duration::try_days(self.days_from_epoch - 1)
            .and_then(|offset| gregorian_epoch().checked_add_signed(offset))
            .ok_or_else(|| {
                DomainError::out_of_range(format!(
                    "day offset {} is outside the Gregorian date range",
                    self.days_from_epoch
                ))
            })
    }

    // Accessors

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the name of the year within its windu.
    pub fn tahun(&self) -> Tahun {
        self.tahun
    }

    /// Returns the month.
    pub fn sasi(&self) -> Sasi {
        self.sasi
    }

    /// Returns the day of month.
    pub fn day(&self) -> u16 {
        self.day
    }

    /// Returns the weekday.
    pub fn dina(&self) -> Dina {
        self.dina
    }

    /// Returns the market day.
    pub fn pasaran(&self) -> Pasaran {
        self.pasaran
    }

    /// Returns the weekday paired with the market day.
    pub fn weton(&self) -> Weton {
        Weton {
            dina: self.dina,
            pasaran: self.pasaran,
        }
    }

    /// Returns the day offset from the epoch (the epoch itself is 1).
    pub fn days_from_epoch(&self) -> i64 {
        self.days_from_epoch
    }
}

impl Default for JavaneseDate {
    fn default() -> Self {
        Self::epoch()
    }
}

impl PartialOrd for JavaneseDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JavaneseDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.days_from_epoch, self.year, self.sasi.ordinal(), self.day).cmp(&(
            other.days_from_epoch,
            other.year,
            other.sasi.ordinal(),
            other.day,
        ))
    }
}

impl TryFrom<NaiveDate> for JavaneseDate {
    type Error = DomainError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_naive_date(date)
    }
}

impl fmt::Display for JavaneseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(crate::value_objects::DEFAULT_DATE_FORMAT))
    }
}

// ============================================================================
// Tests
// ============================================================================
