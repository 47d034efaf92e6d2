//! Per-calendar-month sums of water-balance terms.
//!
//! Missing (NaN) months are skipped, so a sum over a month with no data is 0.

use std::convert::Infallible;
use std::ops::Range;

use ndarray::{Axis, s};
use palmer_calendar::{CalendarError, MONTHS_PER_YEAR, years_for, years_months_from_flat};
use palmer_water_balance::WaterBalance;
use tracing::debug;

use crate::calibration::CalibrationPeriod;
use crate::error::CafecError;

/// First and last calendar year covered by a water balance.
pub fn data_year_range(wb: &WaterBalance) -> (i32, i32) {
    let start = wb.start_year();
    (start, start + years_for(wb.len()) as i32 - 1)
}

/// Sums of each water-balance term by calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySums {
    /// Precipitation.
    pub p: [f64; 12],
    /// Potential evapotranspiration.
    pub pe: [f64; 12],
    /// Potential recharge.
    pub pr: [f64; 12],
    /// Available moisture, which doubles as potential runoff.
    pub sp: [f64; 12],
    /// Potential loss.
    pub pl: [f64; 12],
    /// Recharge.
    pub r: [f64; 12],
    /// Runoff.
    pub ro: [f64; 12],
    /// Loss.
    pub loss: [f64; 12],
    /// Evapotranspiration.
    pub et: [f64; 12],
}

impl MonthlySums {
    /// Sums over the calibration period, taking the whole-series path when
    /// the period spans all data years.
    ///
    /// # Errors
    ///
    /// Returns [`CafecError::EmptyData`] for an empty water balance, or
    /// [`CafecError::InvalidCalibration`] if the period is outside the data.
    pub fn over_period(wb: &WaterBalance, period: &CalibrationPeriod) -> Result<Self, CafecError> {
        if wb.is_empty() {
            return Err(CafecError::EmptyData);
        }
        let (data_start, data_end) = data_year_range(wb);
        period.validate_within(data_start, data_end)?;

        if period.spans(data_start, data_end) {
            debug!("calibration spans all data, summing full series");
            Ok(Self::from_full(wb))
        } else {
            debug!(
                start = period.start_year(),
                end = period.end_year(),
                "summing calibration window"
            );
            Self::from_window(wb, period.row_range(data_start))
        }
    }

    /// Sums every month of the series.
    pub fn from_full(wb: &WaterBalance) -> Self {
        let sum = |series: &[f64]| {
            let mut out = [0.0; 12];
            for (i, &v) in series.iter().enumerate() {
                if !v.is_nan() {
                    out[i % MONTHS_PER_YEAR] += v;
                }
            }
            out
        };
        let Ok(sums) = Self::collect::<Infallible, _>(wb, |series| Ok(sum(series)));
        sums
    }

    /// Sums the year rows in `rows` of the `(years, 12)` grid.
    ///
    /// # Errors
    ///
    /// Returns [`CafecError::Calendar`] if `rows` falls outside the series.
    pub fn from_window(wb: &WaterBalance, rows: Range<usize>) -> Result<Self, CafecError> {
        let sum = |series: &[f64]| -> Result<[f64; 12], CafecError> {
            let grid = years_months_from_flat(series)?;
            if rows.start > rows.end || rows.end > grid.nrows() {
                return Err(CalendarError::Shape {
                    reason: format!("year rows {rows:?} outside {} years", grid.nrows()),
                }
                .into());
            }
            let window = grid.slice(s![rows.clone(), ..]);
            let sums = window.fold_axis(Axis(0), 0.0, |acc, &v| {
                if v.is_nan() { *acc } else { *acc + v }
            });
            let mut out = [0.0; 12];
            for (o, v) in out.iter_mut().zip(sums.iter()) {
                *o = *v;
            }
            Ok(out)
        };
        Self::collect(wb, sum)
    }

    fn collect<E, F>(wb: &WaterBalance, mut sum: F) -> Result<Self, E>
    where
        F: FnMut(&[f64]) -> Result<[f64; 12], E>,
    {
        Ok(Self {
            p: sum(wb.precip())?,
            pe: sum(wb.pe())?,
            pr: sum(wb.pr())?,
            sp: sum(wb.sp())?,
            pl: sum(wb.pl())?,
            r: sum(wb.recharge())?,
            ro: sum(wb.runoff())?,
            loss: sum(wb.loss())?,
            et: sum(wb.et())?,
        })
    }
}
