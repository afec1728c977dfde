//! Unified error types for the calendar domain
//!
//! Every fallible operation in this crate returns `DomainError`, so embedding
//! applications only ever match on one error type.

use thiserror::Error;

/// Unified error type for calendar operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Javanese year precedes the epoch year (1867)
    #[error("Invalid year: {year} (year must be 1867 or later)")]
    InvalidYear { year: i32 },

    /// A required argument is missing, zero, or outside its range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Date arithmetic would land on or before the day preceding the epoch
    #[error("Result predates the epoch (24 March 1936): day offset {days_from_epoch}")]
    ResultBeforeEpoch { days_from_epoch: i64 },

    /// The Gregorian triple is not a real date
    #[error("Invalid Gregorian date: {year:04}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i32, month: u32, day: u32 },

    /// A computed value does not fit the target representation
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Parse error (for table names)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create an invalid year error
    pub fn invalid_year(year: i32) -> Self {
        Self::InvalidYear { year }
    }

    /// Creates an invalid argument error.
    ///
    /// Use this when a precondition on an input is violated:
    /// - Month outside 1..=12
    /// - A day offset of zero or less handed to offset reconstruction
    ///
    /// # Example
    /// ```ignore
    /// if days_from_epoch <= 0 {
    ///     return Err(DomainError::invalid_argument("day offset must be positive"));
    /// }
    /// ```
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a result-before-epoch error
    pub fn result_before_epoch(days_from_epoch: i64) -> Self {
        Self::ResultBeforeEpoch { days_from_epoch }
    }

    /// Create an invalid Gregorian date error
    pub fn invalid_gregorian_date(year: i32, month: u32, day: u32) -> Self {
        Self::InvalidGregorianDate { year, month, day }
    }

    /// Create an out of range error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known table entry name or alias.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_year_error() {
        let err = DomainError::invalid_year(1800);
        assert!(matches!(err, DomainError::InvalidYear { year: 1800 }));
        assert_eq!(
            err.to_string(),
            "Invalid year: 1800 (year must be 1867 or later)"
        );
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = DomainError::invalid_argument("month must be within 1..=12, got 0");
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "Invalid argument: month must be within 1..=12, got 0"
        );
    }

    #[test]
    fn test_result_before_epoch_error() {
        let err = DomainError::result_before_epoch(-3);
        assert!(matches!(err, DomainError::ResultBeforeEpoch { .. }));
        assert!(err.to_string().contains("predates the epoch"));
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_invalid_gregorian_date_error() {
        let err = DomainError::invalid_gregorian_date(2024, 2, 30);
        assert_eq!(err.to_string(), "Invalid Gregorian date: 2024-02-30");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown sasi: Januari");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown sasi: Januari");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DomainError>();
    }
}
