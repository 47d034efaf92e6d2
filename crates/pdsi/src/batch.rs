//! Independent runs over many locations.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::PalmerConfig;
use crate::error::PdsiError;
use crate::pipeline::compute_pdsi;
use crate::result::PalmerOutput;

/// Inputs of one location.
#[derive(Debug, Clone)]
pub struct Location {
    /// Monthly precipitation (inches).
    pub precip: Vec<f64>,
    /// Monthly mean temperature (°F).
    pub temp: Vec<f64>,
    /// Site and calibration settings.
    pub config: PalmerConfig,
}

/// Runs [`compute_pdsi`] for every location in parallel.
///
/// Results are returned in input order. A failing location does not stop
/// the others.
#[tracing::instrument(skip_all, fields(n_locations = locations.len()))]
pub fn compute_batch(locations: &[Location]) -> Vec<Result<PalmerOutput, PdsiError>> {
    let results: Vec<Result<PalmerOutput, PdsiError>> = locations
        .par_iter()
        .map(|loc| compute_pdsi(&loc.precip, &loc.temp, &loc.config))
        .collect();

    let n_failed = results.iter().filter(|r| r.is_err()).count();
    if n_failed > 0 {
        warn!(n_failed, "some locations failed");
    }
    debug!(n_ok = results.len() - n_failed, "batch complete");
    results
}
