//! # palmer-cafec
//!
//! Calibration stage of the Palmer drought indices: "Climatically
//! Appropriate For Existing Conditions" (CAFEC) coefficients, the climatic
//! characteristic K, and the moisture anomaly Z-index.
//!
//! ## Pipeline
//!
//! | Step | Function | Output |
//! |------|----------|--------|
//! | 1 | [`estimate_cafec_coefficients`] | alpha, beta, gamma, delta, T-ratio |
//! | 2 | [`estimate_climatic_characteristic`] | K per calendar month |
//! | 3 | [`compute_z_index`] | Z and P̂ per month |
//!
//! Steps 1 and 2 only read the calibration years; step 3 covers the whole
//! series.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calibration` | Calibration period and its validation |
//! | `sums` | Per-calendar-month sums, windowed or full-series |
//! | `coefficients` | CAFEC coefficients and zero-guard policy |
//! | `characteristic` | Climatic characteristic K |
//! | `zindex` | Z-index |
//! | `error` | Error types |

mod calibration;
mod characteristic;
mod coefficients;
mod error;
mod sums;
mod zindex;

pub use calibration::CalibrationPeriod;
pub use characteristic::{ClimaticCharacteristic, estimate_climatic_characteristic};
pub use coefficients::{CafecCoefficients, estimate_cafec_coefficients};
pub use error::CafecError;
pub use sums::{MonthlySums, data_year_range};
pub use zindex::{ZIndex, compute_z_index};
