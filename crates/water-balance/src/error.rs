//! Error types for the palmer-water-balance crate.

use palmer_calendar::CalendarError;

/// Error type for all fallible operations in the palmer-water-balance crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaterBalanceError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the temperature and precipitation series differ in length.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched field.
        field: String,
    },

    /// Returned when a soil or site parameter is out of range.
    #[error("invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Offending value.
        value: f64,
        /// Description of the constraint.
        reason: String,
    },

    /// Wrapped error from the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
