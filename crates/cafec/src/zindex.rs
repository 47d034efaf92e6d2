//! Moisture anomaly Z-index.

use palmer_water_balance::WaterBalance;
use serde::Serialize;
use tracing::debug;

use crate::characteristic::ClimaticCharacteristic;
use crate::coefficients::CafecCoefficients;

/// Z-index and CAFEC precipitation for every month of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZIndex {
    z: Vec<f64>,
    cafec_precip: Vec<f64>,
}

impl ZIndex {
    /// Z-index per month; NaN for missing months.
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// CAFEC precipitation P̂ per month.
    pub fn cafec_precip(&self) -> &[f64] {
        &self.cafec_precip
    }

    /// Consumes `self` and returns the Z-index series.
    pub fn into_z(self) -> Vec<f64> {
        self.z
    }
}

/// Computes `Z = K·(P − P̂)` for every month, with PRO as the runoff term
/// of `P̂`.
#[tracing::instrument(skip_all, fields(n_months = wb.len()))]
pub fn compute_z_index(
    wb: &WaterBalance,
    coefficients: &CafecCoefficients,
    characteristic: &ClimaticCharacteristic,
) -> ZIndex {
    let k = characteristic.k();
    let (z, cafec_precip): (Vec<f64>, Vec<f64>) = (0..wb.len())
        .map(|i| {
            let p_hat =
                coefficients.cafec_precip(i, wb.pe()[i], wb.pr()[i], wb.pro()[i], wb.pl()[i]);
            (k[i % 12] * (wb.precip()[i] - p_hat), p_hat)
        })
        .unzip();

    debug!(
        n_valid = z.iter().filter(|v| !v.is_nan()).count(),
        "z-index computed"
    );
    ZIndex { z, cafec_precip }
}
