//! JSON output records.

use serde::Serialize;

use palmer_pdsi::{CafecCoefficients, CalibrationPeriod, PalmerOutput};

/// Contents of an output file.
#[derive(Debug, Serialize)]
pub struct OutputFile {
    pub sites: Vec<SiteOutput>,
}

/// Indices for one site, or the reason it failed.
///
/// Missing months are written as `null`.
#[derive(Debug, Serialize)]
pub struct SiteOutput {
    pub name: String,
    pub start_year: i32,
    pub n_input_months: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calibration: Option<CalibrationPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<CafecCoefficients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<[f64; 12]>,
    pub z: Vec<Option<f64>>,
    pub pdsi: Vec<Option<f64>>,
    pub phdi: Vec<Option<f64>>,
    pub pmdi: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SiteOutput {
    /// Record for a site that was computed.
    pub fn computed(name: &str, out: &PalmerOutput) -> Self {
        Self {
            name: name.to_string(),
            start_year: out.start_year(),
            n_input_months: out.n_input_months(),
            calibration: Some(*out.calibration()),
            coefficients: Some(out.coefficients().clone()),
            k: Some(*out.characteristic().k()),
            z: nullable(out.z()),
            pdsi: nullable(out.pdsi()),
            phdi: nullable(out.phdi()),
            pmdi: nullable(out.pmdi()),
            error: None,
        }
    }

    /// Record for a site whose computation failed.
    pub fn failed(name: &str, start_year: i32, n_input_months: usize, error: String) -> Self {
        Self {
            name: name.to_string(),
            start_year,
            n_input_months,
            calibration: None,
            coefficients: None,
            k: None,
            z: Vec::new(),
            pdsi: Vec::new(),
            phdi: Vec::new(),
            pmdi: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Maps NaN to `None` so JSON carries `null` instead of failing.
pub fn nullable(values: &[f64]) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|&v| if v.is_finite() { Some(v) } else { None })
        .collect()
}
