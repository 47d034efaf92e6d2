//! # palmer-pdsi
//!
//! Palmer Drought Severity Index pipeline for monthly precipitation and
//! temperature.
//!
//! ## Pipeline
//!
//! | Stage | Crate | Output |
//! |-------|-------|--------|
//! | 1. Reshape | `palmer-calendar` | whole years, NaN-padded |
//! | 2. Water balance | `palmer-water-balance` | PE, PR, PRO, PL, R, RO, L, ET, SS, SU |
//! | 3. CAFEC coefficients | `palmer-cafec` | alpha, beta, gamma, delta, T-ratio |
//! | 4. Climatic characteristic | `palmer-cafec` | K |
//! | 5. Z-index | `palmer-cafec` | Z, P̂ |
//! | 6. Spell tracking | `palmer-spell` | PDSI, PHDI, PMDI |
//!
//! Each location runs sequentially; [`compute_batch`] runs locations in
//! parallel with rayon.
//!
//! ## Quick Start
//!
//! ```ignore
//! use palmer_pdsi::{PalmerConfig, compute_pdsi};
//! use palmer_water_balance::SoilConstants;
//!
//! let config = PalmerConfig::new(SoilConstants::new(5.0, 1.6, 55.0), 35.0, 1950);
//! let out = compute_pdsi(&precip, &temp, &config)?;
//! println!("{:?}", out.pdsi());
//! ```

mod batch;
mod config;
mod error;
mod pipeline;
mod result;

pub use batch::{Location, compute_batch};
pub use config::PalmerConfig;
pub use error::PdsiError;
pub use pipeline::compute_pdsi;
pub use result::PalmerOutput;

pub use palmer_cafec::{CafecCoefficients, CalibrationPeriod, ClimaticCharacteristic};
pub use palmer_water_balance::{SoilConstants, WaterBalance};
