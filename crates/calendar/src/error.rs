//! Error types for the palmer-calendar crate.

/// Error type for all fallible operations in the palmer-calendar crate.
///
/// This enum covers shape failures when arranging monthly series into
/// year-by-month grids, and validation failures for month and year values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a series has no values at all.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when data cannot be arranged as whole years of 12 months.
    #[error("invalid shape: {reason}")]
    Shape {
        /// Description of the shape problem.
        reason: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a year cannot be represented in the Gregorian calendar.
    #[error("year {year} is outside the supported calendar range")]
    InvalidYear {
        /// The unsupported year.
        year: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_data() {
        let err = CalendarError::EmptyData;
        assert_eq!(err.to_string(), "input data is empty");
    }

    #[test]
    fn error_shape() {
        let err = CalendarError::Shape {
            reason: "expected 12 columns, got 9".to_string(),
        };
        assert_eq!(err.to_string(), "invalid shape: expected 12 columns, got 9");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_year() {
        let err = CalendarError::InvalidYear { year: 400_000 };
        assert_eq!(
            err.to_string(),
            "year 400000 is outside the supported calendar range"
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
