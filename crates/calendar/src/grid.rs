//! Year-by-month grids for monthly series.
//!
//! A monthly series is stored flat (one value per month, oldest first) and
//! viewed as a `(years, 12)` grid for per-calendar-month work. Incomplete final
//! years are padded with NaN, which is the missing-value marker throughout the
//! workspace.

use ndarray::{Array2, ArrayViewD, Ix2};

use crate::error::CalendarError;

/// Number of calendar months in a year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Returns `true` if `value` is the missing-value marker (NaN).
#[inline]
pub fn is_missing(value: f64) -> bool {
    value.is_nan()
}

/// Returns the calendar year and 1-indexed month of position `index` in a
/// series starting in January of `start_year`.
pub fn year_month(start_year: i32, index: usize) -> (i32, u8) {
    let year = start_year + (index / MONTHS_PER_YEAR) as i32;
    let month = (index % MONTHS_PER_YEAR) as u8 + 1;
    (year, month)
}

/// Number of whole years needed to hold `n_months` values.
pub fn years_for(n_months: usize) -> usize {
    n_months.div_ceil(MONTHS_PER_YEAR)
}

/// Copies `values` and appends NaN until the length is a multiple of 12.
pub fn pad_to_whole_years(values: &[f64]) -> Vec<f64> {
    let mut padded = values.to_vec();
    padded.resize(years_for(values.len()) * MONTHS_PER_YEAR, f64::NAN);
    padded
}

/// Arranges a flat monthly series as a `(years, 12)` grid, padding the final
/// year with NaN.
///
/// # Errors
///
/// Returns [`CalendarError::EmptyData`] if `values` is empty.
pub fn years_months_from_flat(values: &[f64]) -> Result<Array2<f64>, CalendarError> {
    if values.is_empty() {
        return Err(CalendarError::EmptyData);
    }
    let padded = pad_to_whole_years(values);
    let n_years = padded.len() / MONTHS_PER_YEAR;
    Array2::from_shape_vec((n_years, MONTHS_PER_YEAR), padded).map_err(|e| CalendarError::Shape {
        reason: e.to_string(),
    })
}

/// Arranges rows of monthly values as a `(years, 12)` grid.
///
/// Every row must hold exactly 12 values.
///
/// # Errors
///
/// Returns [`CalendarError::EmptyData`] if there are no rows, or
/// [`CalendarError::Shape`] if any row does not have 12 values.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>, CalendarError> {
    if rows.is_empty() {
        return Err(CalendarError::EmptyData);
    }
    if let Some((i, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != MONTHS_PER_YEAR)
    {
        return Err(CalendarError::Shape {
            reason: format!(
                "row {i} has {} values, expected {MONTHS_PER_YEAR}",
                row.len()
            ),
        });
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), MONTHS_PER_YEAR), flat).map_err(|e| CalendarError::Shape {
        reason: e.to_string(),
    })
}

/// Reshapes and validates monthly data into a `(years, 12)` grid.
///
/// A 1-D series is padded with NaN to whole years. A 2-D array that already
/// has 12 columns is returned unchanged. Anything else is rejected; data is
/// never truncated.
///
/// # Errors
///
/// - [`CalendarError::EmptyData`] if the array holds no values.
/// - [`CalendarError::Shape`] for 0-D arrays, 2-D arrays whose second axis is
///   not 12, and arrays with more than two dimensions.
pub fn reshape_to_years_months(data: ArrayViewD<'_, f64>) -> Result<Array2<f64>, CalendarError> {
    match data.ndim() {
        0 => Err(CalendarError::Shape {
            reason: "expected a monthly series, got a scalar".to_string(),
        }),
        1 => {
            let flat: Vec<f64> = data.iter().copied().collect();
            years_months_from_flat(&flat)
        }
        2 => {
            if data.is_empty() {
                return Err(CalendarError::EmptyData);
            }
            let cols = data.shape()[1];
            if cols != MONTHS_PER_YEAR {
                return Err(CalendarError::Shape {
                    reason: format!(
                        "expected (years, {MONTHS_PER_YEAR}) grid, got {:?}",
                        data.shape()
                    ),
                });
            }
            data.into_dimensionality::<Ix2>()
                .map(|grid| grid.to_owned())
                .map_err(|e| CalendarError::Shape {
                    reason: e.to_string(),
                })
        }
        n => Err(CalendarError::Shape {
            reason: format!("expected 1 or 2 dimensions, got {n}"),
        }),
    }
}
