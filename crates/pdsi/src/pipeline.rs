//! Single-location pipeline: water balance, calibration, Z-index, spells.

use palmer_cafec::{
    compute_z_index, estimate_cafec_coefficients, estimate_climatic_characteristic,
};
use palmer_calendar::{MONTHS_PER_YEAR, years_months_from_flat};
use palmer_spell::track_spells;
use palmer_water_balance::simulate_water_balance;
use tracing::debug;

use crate::config::PalmerConfig;
use crate::error::PdsiError;
use crate::result::PalmerOutput;

/// Computes PDSI, PHDI and PMDI for one location.
///
/// `precip` (inches) and `temp` (°F) are monthly series starting in January
/// of `config.start_year()`. An incomplete final year is padded with missing
/// months. NaN marks a missing month in either input.
///
/// # Errors
///
/// - [`PdsiError::InvalidInput`] if the series differ in length.
/// - [`PdsiError::Calendar`] if the series are empty.
/// - [`PdsiError::WaterBalance`] for invalid soil or site parameters.
/// - [`PdsiError::Cafec`] for a calibration period outside the data or a
///   degenerate calibration.
#[tracing::instrument(skip(precip, temp, config), fields(n_months = precip.len()))]
pub fn compute_pdsi(
    precip: &[f64],
    temp: &[f64],
    config: &PalmerConfig,
) -> Result<PalmerOutput, PdsiError> {
    if precip.len() != temp.len() {
        return Err(PdsiError::InvalidInput {
            reason: format!(
                "precip has {} months, temp has {}",
                precip.len(),
                temp.len()
            ),
        });
    }

    let precip_grid = years_months_from_flat(precip)?;
    let temp_grid = years_months_from_flat(temp)?;
    let n_years = precip_grid.nrows();
    let start_year = config.start_year();
    let end_year = start_year + n_years as i32 - 1;
    debug!(start_year, end_year, "series arranged as whole years");

    let precip_flat: Vec<f64> = precip_grid.iter().copied().collect();
    let temp_flat: Vec<f64> = temp_grid.iter().copied().collect();
    debug_assert_eq!(precip_flat.len(), n_years * MONTHS_PER_YEAR);

    let period = config.calibration_for(n_years);
    period.validate_within(start_year, end_year)?;

    let wb = simulate_water_balance(&temp_flat, &precip_flat, &config.water_balance())?;
    let coefficients = estimate_cafec_coefficients(&wb, &period)?;
    let characteristic = estimate_climatic_characteristic(&wb, &coefficients, &period)?;
    let z_index = compute_z_index(&wb, &coefficients, &characteristic);
    let cafec_precip = z_index.cafec_precip().to_vec();
    let z = z_index.into_z();
    let indices = track_spells(&z, start_year, end_year)?;

    Ok(PalmerOutput::new(
        precip.len(),
        period,
        wb,
        coefficients,
        characteristic,
        z,
        cafec_precip,
        indices,
    ))
}
