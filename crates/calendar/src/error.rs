//! Error types for the baktun-calendar crate.

/// Error type for all fallible operations in the baktun-calendar crate.
///
/// This enum covers validation failures for proleptic Gregorian calendar
/// dates in historical year numbering (no year 0; February has 28 or 29
/// days per the Gregorian leap rule).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when year 0 is given; historical numbering skips it.
    #[error("invalid year: 0 (historical numbering has no year zero; use -1 for 1 BCE)")]
    InvalidYearZero,

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides February's length.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_year_zero() {
        let err = CalendarError::InvalidYearZero;
        assert_eq!(
            err.to_string(),
            "invalid year: 0 (historical numbering has no year zero; use -1 for 1 BCE)"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            year: 2023,
            max_day: 28,
        };
        assert_eq!(
            err.to_string(),
            "invalid day: 29 for month 2 of year 2023 (max 28)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
