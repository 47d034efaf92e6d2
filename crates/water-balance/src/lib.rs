//! # palmer-water-balance
//!
//! Two-layer soil-moisture bucket model for monthly Palmer accounting.
//!
//! Each month, Thornthwaite potential evapotranspiration is computed from
//! temperature and latitude, then precipitation is balanced against it: a
//! surplus recharges the surface inch and then the underlying layer before
//! running off, while a deficit is drawn from the surface first and then
//! proportionally from below. The potential terms (PR, PRO, PL) feed the
//! CAFEC coefficient estimation downstream.
//!
//! ## Pipeline
//!
//! ```text
//! temp, precip ─► PE (pet) ─► balance_month per month ─► WaterBalance
//!                                   ▲            │
//!                                   └─ SoilState ┘
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Soil constants and simulation configuration |
//! | `pet` | Thornthwaite potential evapotranspiration |
//! | `balance` | One-month bucket step |
//! | `simulate` | Sequential simulation over a series |
//! | `result` | Struct-of-arrays output table |
//! | `error` | Error types |

mod balance;
mod config;
mod error;
mod pet;
mod result;
mod simulate;

pub use balance::{Capacity, MonthBalance, SoilState, balance_month};
pub use config::{DEFAULT_TOP_CAPACITY, SoilConstants, WaterBalanceConfig};
pub use error::WaterBalanceError;
pub use pet::{daily_potential_et, daylength_factor, monthly_potential_et};
pub use result::WaterBalance;
pub use simulate::simulate_water_balance;
