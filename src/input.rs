//! JSON site input.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Contents of a sites file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SitesFile {
    pub sites: Vec<SiteRecord>,
}

/// One site: location, optional soil overrides and monthly series.
///
/// Series start in January of `start_year`; `null` marks a missing month.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteRecord {
    pub name: String,
    pub latitude: f64,
    pub start_year: i32,
    #[serde(default)]
    pub awc: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,
    pub precip: Vec<Option<f64>>,
    pub temp: Vec<Option<f64>>,
}

/// Replaces `null` months with NaN.
pub fn with_missing(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

/// Reads and parses a sites file.
pub fn read_sites(path: &Path) -> Result<SitesFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read sites file: {}", path.display()))?;
    let sites: SitesFile = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse sites file: {}", path.display()))?;
    Ok(sites)
}
