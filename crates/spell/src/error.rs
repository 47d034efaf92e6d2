//! Error types for the palmer-spell crate.

/// Error type for all fallible operations in the palmer-spell crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpellError {
    /// Returned when the Z-index series is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the year range does not match the series length.
    #[error("year range {start}-{end} does not match {months} months of data")]
    InvalidYearRange {
        /// First data year.
        start: i32,
        /// Last data year.
        end: i32,
        /// Number of months supplied.
        months: usize,
    },
}
