//! # palmer-calendar
//!
//! Calendar plumbing for monthly climate series: arranging flat series as
//! year-by-month grids, the NaN missing-value convention, and Gregorian month
//! lengths.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["flat monthly series"] -->|"years_months_from_flat()"| B["Array2 (years, 12)"]
//!     C["ArrayViewD"] -->|"reshape_to_years_months()"| B
//!     D["rows of 12"] -->|"from_rows()"| B
//!     E["(year, month)"] -->|"days_in_month()"| F["28..=31"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use palmer_calendar::{days_in_month, years_months_from_flat};
//!
//! // 14 months become two years; the last 10 are NaN
//! let grid = years_months_from_flat(&[1.0; 14]).unwrap();
//! assert_eq!(grid.dim(), (2, 12));
//!
//! assert_eq!(days_in_month(2000, 2).unwrap(), 29);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `grid` | Reshape-and-validate into `(years, 12)` grids |
//! | `days` | Gregorian days per month and leap years |
//! | `error` | Error types |

mod days;
mod error;
mod grid;

pub use days::{days_in_month, is_leap_year};
pub use error::CalendarError;
pub use grid::{
    MONTHS_PER_YEAR, from_rows, is_missing, pad_to_whole_years, reshape_to_years_months,
    year_month, years_for, years_months_from_flat,
};
