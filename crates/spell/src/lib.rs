//! # palmer-spell
//!
//! Spell tracking for the Palmer drought indices. A Z-index series is turned
//! into PDSI, PHDI and PMDI by a sequential recurrence that follows
//! incipient wet (X1) and dry (X2) spells alongside the established spell
//! (X3), and the probability that an established spell has ended.
//!
//! Some months cannot be classified when they are first seen: whether they
//! belong to a new wet spell, a new drought or the established one depends
//! on months yet to come. Those months wait in a backtrack buffer and are
//! assigned retroactively once a later month settles the question.
//!
//! ## Month transition
//!
//! ```text
//!                    ┌── |X3| <= 0.5 ────────────────► recompute-X
//!  prob in {0,100} ──┼── X3 > 0.5, Z >= 0.15 ────────► consolidate
//!                    ├── X3 > 0.5, Z < 0.15 ─────────► wet-abatement
//!                    ├── X3 < -0.5, Z < -0.15 ───────► consolidate
//!                    └── X3 < -0.5, Z >= -0.15 ──────► dry-abatement
//!  0 < prob < 100 ───── X3 > 0 ? wet-abatement : dry-abatement
//!
//!  abatement ── reversed ──► consolidate
//!            └─ otherwise ─► recompute-X
//! ```
//!
//! `consolidate` and a conclusive `recompute-X` resolve the month and flush
//! the buffer; an inconclusive `recompute-X` defers it.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `state` | Carried state and per-month provisional values |
//! | `transition` | Pure one-month transition functions |
//! | `backtrack` | Buffer of unresolved months |
//! | `select` | Probability-weighted PMDI selection |
//! | `tracker` | Sequential driver |
//! | `result` | Output series |
//! | `error` | Error types |

mod backtrack;
mod error;
mod result;
mod select;
mod state;
mod tracker;
mod transition;

pub use backtrack::{AssignRule, BacktrackBuffer, PendingMonth};
pub use error::SpellError;
pub use result::PalmerIndices;
pub use select::select_weighted;
pub use state::{MonthValues, SeverityState};
pub use tracker::SpellTracker;
pub use transition::{
    Resolution, Step, consolidate, dry_abatement, recompute_x, step, wet_abatement,
};

/// Months per data year.
const MONTHS_PER_YEAR: usize = 12;

/// Runs the spell recurrence over a Z-index series covering
/// `start_year..=end_year`.
///
/// # Errors
///
/// - [`SpellError::EmptyData`] if `z` is empty.
/// - [`SpellError::InvalidYearRange`] if the series is not exactly 12 months
///   per year of the range.
#[tracing::instrument(skip(z), fields(n_months = z.len()))]
pub fn track_spells(z: &[f64], start_year: i32, end_year: i32) -> Result<PalmerIndices, SpellError> {
    if z.is_empty() {
        return Err(SpellError::EmptyData);
    }
    let n_years = i64::from(end_year) - i64::from(start_year) + 1;
    if n_years <= 0 || n_years as usize * MONTHS_PER_YEAR != z.len() {
        return Err(SpellError::InvalidYearRange {
            start: start_year,
            end: end_year,
            months: z.len(),
        });
    }

    let mut tracker = SpellTracker::with_capacity(z.len());
    for &value in z {
        tracker.push_month(value);
    }
    let indices = tracker.finish();

    tracing::debug!(
        n_valid = indices.pdsi().iter().filter(|v| !v.is_nan()).count(),
        "spell tracking complete"
    );
    Ok(indices)
}
