//! Soil constants and water-balance configuration.

use serde::{Deserialize, Serialize};

use crate::error::WaterBalanceError;

/// Default moisture capacity of the surface layer (inches).
pub const DEFAULT_TOP_CAPACITY: f64 = 1.0;

/// Per-site soil constants.
///
/// `awc` is the available water capacity of the underlying layer in inches,
/// excluding the surface inch. `b` and `h` are the empirical constants of the
/// Thornthwaite evapotranspiration formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilConstants {
    awc: f64,
    b: f64,
    h: f64,
}

impl SoilConstants {
    /// Creates soil constants from AWC (inches), B and H.
    pub fn new(awc: f64, b: f64, h: f64) -> Self {
        Self { awc, b, h }
    }

    /// Available water capacity of the underlying layer (inches).
    pub fn awc(&self) -> f64 {
        self.awc
    }

    /// Thornthwaite exponent B.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Thornthwaite heat index H.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Validates the constants.
    ///
    /// # Errors
    ///
    /// Returns [`WaterBalanceError::InvalidParameter`] if AWC is negative or
    /// not finite, if B is not finite, or if H is not finite and positive.
    pub fn validate(&self) -> Result<(), WaterBalanceError> {
        if !self.awc.is_finite() || self.awc < 0.0 {
            return Err(invalid("awc", self.awc, "must be finite and >= 0"));
        }
        if !self.b.is_finite() {
            return Err(invalid("b", self.b, "must be finite"));
        }
        if !self.h.is_finite() || self.h <= 0.0 {
            return Err(invalid("h", self.h, "must be finite and > 0"));
        }
        Ok(())
    }
}

/// Configuration for a single-site water-balance simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterBalanceConfig {
    soil: SoilConstants,
    /// Latitude in degrees north.
    latitude: f64,
    /// Calendar year of the first month (January) of the series.
    start_year: i32,
    /// Surface-layer capacity (inches).
    top_capacity: f64,
}

impl WaterBalanceConfig {
    /// Creates a configuration with the default 1-inch surface layer.
    pub fn new(soil: SoilConstants, latitude: f64, start_year: i32) -> Self {
        Self {
            soil,
            latitude,
            start_year,
            top_capacity: DEFAULT_TOP_CAPACITY,
        }
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

    /// Returns the first calendar year of the series.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the surface-layer capacity (inches).
    pub fn top_capacity(&self) -> f64 {
        self.top_capacity
    }

    /// Negative tangent of the latitude, the input of the daylength factor.
    pub fn neg_tan_lat(&self) -> f64 {
        -self.latitude.to_radians().tan()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WaterBalanceError::InvalidParameter`] for invalid soil
    /// constants, a latitude outside (-90, 90), or a non-positive surface
    /// capacity.
    pub fn validate(&self) -> Result<(), WaterBalanceError> {
        self.soil.validate()?;
        if !self.latitude.is_finite() || self.latitude.abs() >= 90.0 {
            return Err(invalid(
                "latitude",
                self.latitude,
                "must be finite and strictly between -90 and 90",
            ));
        }
        if !self.top_capacity.is_finite() || self.top_capacity <= 0.0 {
            return Err(invalid(
                "top_capacity",
                self.top_capacity,
                "must be finite and > 0",
            ));
        }
        Ok(())
    }
}

fn invalid(name: &str, value: f64, reason: &str) -> WaterBalanceError {
    WaterBalanceError::InvalidParameter {
        name: name.to_string(),
        value,
        reason: reason.to_string(),
    }
}
