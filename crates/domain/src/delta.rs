//! Date deltas and Javanese date arithmetic
//!
//! A [`JavaneseDateDelta`] is measured relative to the date it is applied to:
//! a year counts the days of the cycle-years starting at the current one, and a
//! month counts the days of the months starting at the current one. Months
//! beyond twelve are folded into years before anything is summed.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

use crate::date::JavaneseDate;
use crate::error::DomainError;
use crate::value_objects::{Sasi, Tahun, DAYS_IN_WINDU, SASI_IN_TAHUN, TAHUN_IN_WINDU};

// ============================================================================
// JavaneseDateDelta
// ============================================================================

/// Year, month and day offsets to add to or subtract from a `JavaneseDate`
///
/// Each component is signed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct JavaneseDateDelta {
    pub years: i32,
    pub months: i32,
    pub days: i64,
}

impl JavaneseDateDelta {
    /// Create a new delta.
    pub fn new(years: i32, months: i32, days: i64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// A delta of whole years.
    pub fn years(years: i32) -> Self {
        Self::new(years, 0, 0)
    }

    /// A delta of whole months.
    pub fn months(months: i32) -> Self {
        Self::new(0, months, 0)
    }

    /// A delta of days.
    pub fn days(days: i64) -> Self {
        Self::new(0, 0, days)
    }

    /// Returns `true` if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

impl Neg for JavaneseDateDelta {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.years, -self.months, -self.days)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl JavaneseDate {
    /// Number of days `delta` spans when applied from this date.
    ///
    /// Whole windu count 2835 days. The remaining years sum the cycle-years
    /// starting at the current one, and the remaining months sum the months
    /// starting at the current one, wrapping around their tables.
    fn delta_days(&self, delta: &JavaneseDateDelta) -> Result<i64, DomainError> {
        let sasi_count = SASI_IN_TAHUN as i64;
        let tahun_count = TAHUN_IN_WINDU as i64;

        let months = i64::from(delta.months);
        let years = i64::from(delta.years) + months.div_euclid(sasi_count);
        let months = months.rem_euclid(sasi_count);

        let windu = years.div_euclid(tahun_count);
        let years = years.rem_euclid(tahun_count);

        let current_tahun = i64::from(self.tahun().ordinal());
        let tahun_days: i64 = (0..years)
            .map(|k| i64::from(Tahun::from_ordinal(current_tahun + k).days()))
            .sum();

        let current_sasi = i64::from(self.sasi().ordinal());
        let sasi_days: i64 = (0..months)
            .map(|k| i64::from(Sasi::from_ordinal(current_sasi + k).days()))
            .sum();

        (windu * DAYS_IN_WINDU + tahun_days + sasi_days)
            .checked_add(delta.days)
            .ok_or_else(|| DomainError::out_of_range("date delta overflows the day offset"))
    }

    /// Add a delta, returning a new date.
    ///
    /// # Errors
    ///
    /// - `DomainError::ResultBeforeEpoch` if a negative delta reaches day
    ///   offset 0 or below
    /// - `DomainError::OutOfRange` on integer overflow
    pub fn checked_add(&self, delta: JavaneseDateDelta) -> Result<Self, DomainError> {
        let delta_days = self.delta_days(&delta)?;
        let days_from_epoch = self
            .days_from_epoch()
            .checked_add(delta_days)
            .ok_or_else(|| DomainError::out_of_range("date addition overflows the day offset"))?;
        self.shift_to(days_from_epoch, &delta)
    }

    /// Subtract a delta, returning a new date.
    ///
    /// # Errors
    ///
    /// - `DomainError::ResultBeforeEpoch` if the result would be day offset 0
    ///   or below (before 24 March 1936)
    /// - `DomainError::OutOfRange` on integer overflow
    pub fn checked_sub(&self, delta: JavaneseDateDelta) -> Result<Self, DomainError> {
        let delta_days = self.delta_days(&delta)?;
        let days_from_epoch = self
            .days_from_epoch()
            .checked_sub(delta_days)
            .ok_or_else(|| DomainError::out_of_range("date subtraction overflows the day offset"))?;
        self.shift_to(days_from_epoch, &delta)
    }

    fn shift_to(
        &self,
        days_from_epoch: i64,
        delta: &JavaneseDateDelta,
    ) -> Result<Self, DomainError> {
        if days_from_epoch <= 0 {
            tracing::warn!(
                from = self.days_from_epoch(),
                to = days_from_epoch,
                ?delta,
                "Rejected date arithmetic before the epoch"
            );
            return Err(DomainError::result_before_epoch(days_from_epoch));
        }

        tracing::debug!(
            from = self.days_from_epoch(),
            to = days_from_epoch,
            ?delta,
            "Applied date delta"
        );
        Self::from_days_from_epoch(days_from_epoch)
    }
}

impl Add<JavaneseDateDelta> for JavaneseDate {
    type Output = JavaneseDate;

    /// # Panics
    ///
    /// Panics if the result falls before the epoch or overflows. Use
    /// [`JavaneseDate::checked_add`] to handle those cases.
    fn add(self, delta: JavaneseDateDelta) -> Self::Output {
        self.checked_add(delta)
            .expect("`JavaneseDate + JavaneseDateDelta` out of range")
    }
}

impl Sub<JavaneseDateDelta> for JavaneseDate {
    type Output = JavaneseDate;

    /// # Panics
    ///
    /// Panics if the result falls before the epoch or overflows. Use
    /// [`JavaneseDate::checked_sub`] to handle those cases.
    fn sub(self, delta: JavaneseDateDelta) -> Self::Output {
        self.checked_sub(delta)
            .expect("`JavaneseDate - JavaneseDateDelta` out of range")
    }
}
