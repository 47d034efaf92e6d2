//! Error types for the palmer-cafec crate.

use palmer_calendar::CalendarError;

/// Error type for all fallible operations in the palmer-cafec crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CafecError {
    /// Returned when the water balance holds no months.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the calibration period is reversed or outside the data.
    #[error(
        "invalid calibration period {start}-{end}: data covers {data_start}-{data_end}"
    )]
    InvalidCalibration {
        /// First calibration year.
        start: i32,
        /// Last calibration year.
        end: i32,
        /// First year of data.
        data_start: i32,
        /// Last year of data.
        data_end: i32,
    },

    /// Returned when the mean absolute moisture departure of a calendar
    /// month is zero over the calibration period.
    #[error("mean absolute moisture departure is zero for month {month}")]
    DegenerateDeparture {
        /// Calendar month (1..=12).
        month: u8,
    },

    /// Returned when a climatic characteristic is not finite.
    #[error("climatic characteristic for month {month} is not finite: {value}")]
    NonFiniteWeight {
        /// Calendar month (1..=12).
        month: u8,
        /// The computed value.
        value: f64,
    },

    /// Wrapped error from the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
