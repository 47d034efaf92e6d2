//! Calibration period selection.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::CafecError;

/// Inclusive range of calendar years used to estimate coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationPeriod {
    start_year: i32,
    end_year: i32,
}

impl CalibrationPeriod {
    /// Creates a period covering `start_year..=end_year`.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
        }
    }

    /// Period covering `n_years` whole years from `data_start_year`.
    pub fn full(data_start_year: i32, n_years: usize) -> Self {
        Self::new(data_start_year, data_start_year + n_years as i32 - 1)
    }

    /// First calibration year.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Last calibration year.
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Number of calibration years.
    pub fn n_years(&self) -> usize {
        (self.end_year - self.start_year + 1).max(0) as usize
    }

    /// Checks that the period is ordered and lies within the data years.
    ///
    /// # Errors
    ///
    /// Returns [`CafecError::InvalidCalibration`] otherwise.
    pub fn validate_within(&self, data_start: i32, data_end: i32) -> Result<(), CafecError> {
        if self.start_year > self.end_year
            || self.start_year < data_start
            || self.end_year > data_end
        {
            return Err(CafecError::InvalidCalibration {
                start: self.start_year,
                end: self.end_year,
                data_start,
                data_end,
            });
        }
        Ok(())
    }

    /// Returns `true` if the period covers exactly the data years.
    pub fn spans(&self, data_start: i32, data_end: i32) -> bool {
        self.start_year == data_start && self.end_year == data_end
    }

    /// Year-row indices of the period in a grid starting at `data_start`.
    ///
    /// The period must already have been validated against the data.
    pub fn row_range(&self, data_start: i32) -> Range<usize> {
        let first = (self.start_year - data_start) as usize;
        first..first + self.n_years()
    }
}
