//! CAFEC coefficients (alpha, beta, gamma, delta) and the T-ratio.

use palmer_water_balance::WaterBalance;
use serde::Serialize;
use tracing::{debug, warn};

use crate::calibration::CalibrationPeriod;
use crate::error::CafecError;
use crate::sums::MonthlySums;

/// Monthly ratio coefficients estimated over a calibration period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CafecCoefficients {
    alpha: [f64; 12],
    beta: [f64; 12],
    gamma: [f64; 12],
    delta: [f64; 12],
    t_ratio: [f64; 12],
}

/// `num / den`, or 1.0 when both are zero and 0.0 when only `den` is.
fn guarded_ratio(num: f64, den: f64) -> f64 {
    if den != 0.0 {
        num / den
    } else if num == 0.0 {
        1.0
    } else {
        0.0
    }
}

impl CafecCoefficients {
    /// Builds the coefficients from calibration sums.
    ///
    /// Gamma divides runoff by SP, the available moisture at the start of
    /// the month. Delta has no 1.0 fallback: a zero PL sum gives 0.0.
    pub fn from_sums(sums: &MonthlySums) -> Self {
        let mut c = Self {
            alpha: [0.0; 12],
            beta: [0.0; 12],
            gamma: [0.0; 12],
            delta: [0.0; 12],
            t_ratio: [0.0; 12],
        };
        for m in 0..12 {
            c.alpha[m] = guarded_ratio(sums.et[m], sums.pe[m]);
            c.beta[m] = guarded_ratio(sums.r[m], sums.pr[m]);
            c.gamma[m] = guarded_ratio(sums.ro[m], sums.sp[m]);
            c.delta[m] = if sums.pl[m] != 0.0 {
                sums.loss[m] / sums.pl[m]
            } else {
                0.0
            };
            c.t_ratio[m] = (sums.pe[m] + sums.r[m] + sums.ro[m]) / (sums.p[m] + sums.loss[m]);

            if sums.pe[m] == 0.0 {
                warn!(month = m + 1, "potential evapotranspiration sums to zero");
            }
        }
        c
    }

    /// Creates coefficients from explicit monthly arrays.
    pub fn new(
        alpha: [f64; 12],
        beta: [f64; 12],
        gamma: [f64; 12],
        delta: [f64; 12],
        t_ratio: [f64; 12],
    ) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            delta,
            t_ratio,
        }
    }

    /// Evapotranspiration coefficient per calendar month.
    pub fn alpha(&self) -> &[f64; 12] {
        &self.alpha
    }

    /// Recharge coefficient per calendar month.
    pub fn beta(&self) -> &[f64; 12] {
        &self.beta
    }

    /// Runoff coefficient per calendar month.
    pub fn gamma(&self) -> &[f64; 12] {
        &self.gamma
    }

    /// Loss coefficient per calendar month.
    pub fn delta(&self) -> &[f64; 12] {
        &self.delta
    }

    /// Moisture demand over supply per calendar month.
    pub fn t_ratio(&self) -> &[f64; 12] {
        &self.t_ratio
    }

    /// CAFEC precipitation `alpha·PE + beta·PR + gamma·runoff − delta·PL`
    /// for a 0-indexed calendar month.
    pub fn cafec_precip(&self, month_index: usize, pe: f64, pr: f64, runoff: f64, pl: f64) -> f64 {
        let m = month_index % 12;
        self.alpha[m] * pe + self.beta[m] * pr + self.gamma[m] * runoff - self.delta[m] * pl
    }
}

/// Estimates CAFEC coefficients over a calibration period.
///
/// # Errors
///
/// Returns [`CafecError::EmptyData`] or [`CafecError::InvalidCalibration`].
#[tracing::instrument(skip(wb), fields(n_months = wb.len()))]
pub fn estimate_cafec_coefficients(
    wb: &WaterBalance,
    period: &CalibrationPeriod,
) -> Result<CafecCoefficients, CafecError> {
    let sums = MonthlySums::over_period(wb, period)?;
    let coefficients = CafecCoefficients::from_sums(&sums);
    debug!(alpha = ?coefficients.alpha, delta = ?coefficients.delta, "cafec coefficients");
    Ok(coefficients)
}
