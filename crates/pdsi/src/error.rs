//! Error types for the palmer-pdsi crate.

use palmer_cafec::CafecError;
use palmer_calendar::CalendarError;
use palmer_spell::SpellError;
use palmer_water_balance::WaterBalanceError;

/// Error type for all fallible operations in the palmer-pdsi crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PdsiError {
    /// Returned when the input series are inconsistent with each other.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped error from the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Wrapped error from the water-balance crate.
    #[error(transparent)]
    WaterBalance(#[from] WaterBalanceError),

    /// Wrapped error from the CAFEC crate.
    #[error(transparent)]
    Cafec(#[from] CafecError),

    /// Wrapped error from the spell crate.
    #[error(transparent)]
    Spell(#[from] SpellError),
}
