use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Palmer configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PalmerToml {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Calibration years (default: all data years of each site).
    #[serde(default)]
    pub calibration: CalibrationToml,

    /// Soil constants used when a site does not set its own.
    #[serde(default)]
    pub soil: SoilToml,

    /// Execution settings.
    #[serde(default)]
    pub run: RunToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_temp_unit")]
    pub temp_unit: String,
    #[serde(default = "default_precip_unit")]
    pub precip_unit: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            temp_unit: default_temp_unit(),
            precip_unit: default_precip_unit(),
        }
    }
}

fn default_temp_unit() -> String {
    "fahrenheit".to_string()
}
fn default_precip_unit() -> String {
    "inches".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CalibrationToml {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoilToml {
    pub awc: Option<f64>,
    pub b: Option<f64>,
    pub h: Option<f64>,
    #[serde(default = "default_top_capacity")]
    pub top_capacity: f64,
}

impl Default for SoilToml {
    fn default() -> Self {
        Self {
            awc: None,
            b: None,
            h: None,
            top_capacity: default_top_capacity(),
        }
    }
}

fn default_top_capacity() -> f64 {
    palmer_water_balance::DEFAULT_TOP_CAPACITY
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RunToml {
    /// Worker threads for the site batch (default: one per core).
    pub threads: Option<usize>,
}

/// Reads and parses the TOML configuration file.
pub fn load(path: &Path) -> Result<PalmerToml> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: PalmerToml = toml::from_str("").unwrap();
        assert_eq!(cfg.io.temp_unit, "fahrenheit");
        assert_eq!(cfg.io.precip_unit, "inches");
        assert!(cfg.calibration.start_year.is_none());
        assert!(cfg.soil.awc.is_none());
        assert_eq!(cfg.soil.top_capacity, 1.0);
        assert!(cfg.run.threads.is_none());
    }

    #[test]
    fn full_file() {
        let cfg: PalmerToml = toml::from_str(
            r#"
            [io]
            input = "sites.json"
            output = "pdsi.json"
            temp_unit = "celsius"
            precip_unit = "mm"

            [calibration]
            start_year = 1931
            end_year = 1990

            [soil]
            awc = 5.0
            b = 1.6
            h = 55.0

            [run]
            threads = 4
            "#,
        )
        .unwrap();
        assert_eq!(cfg.io.input, Some(PathBuf::from("sites.json")));
        assert_eq!(cfg.calibration.end_year, Some(1990));
        assert_eq!(cfg.soil.h, Some(55.0));
        assert_eq!(cfg.soil.top_capacity, 1.0);
        assert_eq!(cfg.run.threads, Some(4));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load(Path::new("/nonexistent/palmer.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn unknown_field_rejected() {
        let res: Result<PalmerToml, _> = toml::from_str("[soil]\nclay = 0.3\n");
        assert!(res.is_err());
    }
}
