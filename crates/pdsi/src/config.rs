//! Configuration for a single-location PDSI run.

use palmer_cafec::CalibrationPeriod;
use palmer_water_balance::{DEFAULT_TOP_CAPACITY, SoilConstants, WaterBalanceConfig};

/// Site and calibration settings for [`compute_pdsi`](crate::compute_pdsi).
#[derive(Debug, Clone, PartialEq)]
pub struct PalmerConfig {
    soil: SoilConstants,
    /// Latitude in degrees north.
    latitude: f64,
    /// Calendar year of the first month (January).
    start_year: i32,
    /// Calibration years; `None` calibrates over all data years.
    calibration: Option<CalibrationPeriod>,
    /// Surface-layer capacity (inches).
    top_capacity: f64,
}

impl PalmerConfig {
    /// Creates a configuration calibrated over the full data range.
    pub fn new(soil: SoilConstants, latitude: f64, start_year: i32) -> Self {
        Self {
            soil,
            latitude,
            start_year,
            calibration: None,
            top_capacity: DEFAULT_TOP_CAPACITY,
        }
    }

    /// Restricts calibration to a period within the data.
    pub fn with_calibration(mut self, period: CalibrationPeriod) -> Self {
        self.calibration = Some(period);
        self
    }

    /// Sets the surface-layer capacity.
    pub fn with_top_capacity(mut self, capacity: f64) -> Self {
        self.top_capacity = capacity;
        self
    }

    /// Returns the soil constants.
    pub fn soil(&self) -> &SoilConstants {
        &self.soil
    }

    /// Returns the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the first data year.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the explicit calibration period, if any.
    pub fn calibration(&self) -> Option<&CalibrationPeriod> {
        self.calibration.as_ref()
    }

    /// Calibration period for data covering `n_years` years.
    pub fn calibration_for(&self, n_years: usize) -> CalibrationPeriod {
        self.calibration
            .unwrap_or_else(|| CalibrationPeriod::full(self.start_year, n_years))
    }

    /// Water-balance configuration derived from these settings.
    pub fn water_balance(&self) -> WaterBalanceConfig {
        WaterBalanceConfig::new(self.soil, self.latitude, self.start_year)
            .with_top_capacity(self.top_capacity)
    }
}
