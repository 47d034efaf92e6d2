//! Climatic characteristic K.

use palmer_calendar::MONTHS_PER_YEAR;
use palmer_water_balance::WaterBalance;
use serde::Serialize;
use tracing::debug;

use crate::calibration::CalibrationPeriod;
use crate::coefficients::CafecCoefficients;
use crate::error::CafecError;
use crate::sums::data_year_range;

/// Mean absolute departures at or below this are treated as zero.
const MIN_MEAN_DEPARTURE: f64 = 1e-9;

/// Monthly weighting factor that scales moisture departures to Z-index units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimaticCharacteristic {
    k: [f64; 12],
    mean_abs_departure: [f64; 12],
}

impl ClimaticCharacteristic {
    /// Creates a characteristic from explicit K values.
    pub fn from_k(k: [f64; 12]) -> Self {
        Self {
            k,
            mean_abs_departure: [f64::NAN; 12],
        }
    }

    /// K per calendar month.
    pub fn k(&self) -> &[f64; 12] {
        &self.k
    }

    /// Mean absolute moisture departure D̄ per calendar month over the
    /// calibration period (NaN when built from explicit K).
    pub fn mean_abs_departure(&self) -> &[f64; 12] {
        &self.mean_abs_departure
    }
}

/// Estimates K from the calibration-period moisture departures.
///
/// For each calibration month the departure `D = P − P̂` uses SP as the
/// runoff term. With `D̄` the mean of `|D|` per calendar month,
/// `K' = 1.5·log10((T + 2.8) / D̄) + 0.5` and `K = 17.67·K' / Σ(D̄·K')`.
///
/// # Errors
///
/// - [`CafecError::InvalidCalibration`] if the period is outside the data.
/// - [`CafecError::DegenerateDeparture`] if some `D̄` is zero.
/// - [`CafecError::NonFiniteWeight`] if some K is not finite.
#[tracing::instrument(skip(wb, coefficients), fields(n_months = wb.len()))]
pub fn estimate_climatic_characteristic(
    wb: &WaterBalance,
    coefficients: &CafecCoefficients,
    period: &CalibrationPeriod,
) -> Result<ClimaticCharacteristic, CafecError> {
    if wb.is_empty() {
        return Err(CafecError::EmptyData);
    }
    let (data_start, data_end) = data_year_range(wb);
    period.validate_within(data_start, data_end)?;

    let rows = period.row_range(data_start);
    let first = rows.start * MONTHS_PER_YEAR;
    let last = (rows.end * MONTHS_PER_YEAR).min(wb.len());

    let mut sum_abs = [0.0; 12];
    for i in first..last {
        let p_hat = coefficients.cafec_precip(i, wb.pe()[i], wb.pr()[i], wb.sp()[i], wb.pl()[i]);
        let d = wb.precip()[i] - p_hat;
        if !d.is_nan() {
            sum_abs[i % MONTHS_PER_YEAR] += d.abs();
        }
    }

    let n_years = period.n_years() as f64;
    let mut mean_abs_departure = [0.0; 12];
    let mut k_prime = [0.0; 12];
    let mut weight_sum = 0.0;
    for m in 0..12 {
        let d_bar = sum_abs[m] / n_years;
        if d_bar.is_nan() || d_bar <= MIN_MEAN_DEPARTURE {
            return Err(CafecError::DegenerateDeparture { month: m as u8 + 1 });
        }
        mean_abs_departure[m] = d_bar;
        k_prime[m] = 1.5 * ((coefficients.t_ratio()[m] + 2.8) / d_bar).log10() + 0.5;
        weight_sum += d_bar * k_prime[m];
    }

    let mut k = [0.0; 12];
    for m in 0..12 {
        k[m] = 17.67 * k_prime[m] / weight_sum;
        if !k[m].is_finite() {
            return Err(CafecError::NonFiniteWeight {
                month: m as u8 + 1,
                value: k[m],
            });
        }
    }

    debug!(?k, "climatic characteristic");
    Ok(ClimaticCharacteristic {
        k,
        mean_abs_departure,
    })
}
