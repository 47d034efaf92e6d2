//! One-month transition of the spell recurrence.
//!
//! Each transition is a pure function of the carried state and the month's
//! Z-index. It returns the month's provisional values, the state for the
//! next month, and whether the month resolves now or joins the backtrack
//! buffer.

use crate::backtrack::AssignRule;
use crate::state::{MonthValues, SeverityState};

/// Severity decay applied to every index each month.
const PERSISTENCE: f64 = 0.897;

/// |X3| at or below this means no spell is established.
const NEAR_NORMAL: f64 = 0.5;

/// Z-index needed to keep a wet spell going (negated for droughts).
const SPELL_MAINTENANCE: f64 = 0.15;

/// Slope of the Z-index needed to end a spell of a given severity.
const END_SLOPE: f64 = -2.691;

/// Intercept magnitude of the Z-index needed to end a spell.
const END_INTERCEPT: f64 = 1.5;

/// Incipient severity that establishes a new spell.
const ESTABLISH: f64 = 1.0;

/// What happens to a month after its transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The month is final; resolve any buffered months with the rule.
    Assign(AssignRule),
    /// The month cannot be classified yet and is buffered.
    Defer,
}

/// Result of one month's transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Provisional values of this month.
    pub values: MonthValues,
    /// State carried to the next month.
    pub next: SeverityState,
    /// Whether the month resolves now.
    pub resolution: Resolution,
}

fn decay(x: f64, z: f64) -> f64 {
    PERSISTENCE * x + z / 3.0
}

/// Advances the recurrence by one month with Z-index `z`.
pub fn step(state: &SeverityState, z: f64) -> Step {
    if state.is_settled() {
        if state.x3.abs() <= NEAR_NORMAL {
            recompute_x(state, z, 0.0, 0.0, 0.0)
        } else if state.x3 > NEAR_NORMAL {
            if z >= SPELL_MAINTENANCE {
                consolidate(state, z)
            } else {
                wet_abatement(state, z)
            }
        } else if z < -SPELL_MAINTENANCE {
            consolidate(state, z)
        } else {
            dry_abatement(state, z)
        }
    } else if state.x3 > 0.0 {
        wet_abatement(state, z)
    } else {
        dry_abatement(state, z)
    }
}

/// The established spell continues: incipient indices reset, X3 decays
/// toward this month's anomaly, and the month resolves on X3.
pub fn consolidate(state: &SeverityState, z: f64) -> Step {
    let x3 = decay(state.x3, z);
    Step {
        values: MonthValues {
            prob: 0.0,
            x1: 0.0,
            x2: 0.0,
            x3,
            x: x3,
        },
        next: SeverityState {
            x1: 0.0,
            x2: 0.0,
            x3,
            v: 0.0,
            prob: 0.0,
        },
        resolution: Resolution::Assign(AssignRule::UseX3),
    }
}

/// A wet spell may be ending.
pub fn wet_abatement(state: &SeverityState, z: f64) -> Step {
    let pv = z - SPELL_MAINTENANCE + state.v.min(0.0);
    if pv >= 0.0 {
        return consolidate(state, z);
    }
    let ze = END_SLOPE * state.x3 + END_INTERCEPT;
    abate(state, z, pv, ze)
}

/// A drought may be ending.
pub fn dry_abatement(state: &SeverityState, z: f64) -> Step {
    let pv = z + SPELL_MAINTENANCE + state.v.max(0.0);
    if pv <= 0.0 {
        return consolidate(state, z);
    }
    let ze = END_SLOPE * state.x3 - END_INTERCEPT;
    abate(state, z, pv, ze)
}

/// Probability that the spell has ended given accumulated value `pv`
/// against the anomaly `ze` needed to end it.
fn abate(state: &SeverityState, z: f64, pv: f64, ze: f64) -> Step {
    let q = if state.prob == 100.0 { ze } else { ze + state.v };
    let ppr = pv / q * 100.0;
    if ppr >= 100.0 {
        recompute_x(state, z, 100.0, 0.0, pv)
    } else {
        recompute_x(state, z, ppr, decay(state.x3, z), pv)
    }
}

/// Updates the incipient indices and decides whether the month resolves.
///
/// `prob`, `x3` and `pv` are this month's probability, established severity
/// and accumulated value from the branch that led here.
pub fn recompute_x(state: &SeverityState, z: f64, prob: f64, x3: f64, pv: f64) -> Step {
    let mut x1 = decay(state.x1, z).max(0.0);
    let mut x2 = decay(state.x2, z).min(0.0);
    let mut x3 = x3;

    let (x, resolution) = if x3 == 0.0 && x1 >= ESTABLISH {
        x3 = x1;
        x1 = 0.0;
        (x3, Resolution::Assign(AssignRule::UseX1))
    } else if x3 == 0.0 && x2 <= -ESTABLISH {
        x3 = x2;
        x2 = 0.0;
        (x3, Resolution::Assign(AssignRule::UseX2))
    } else if x3 == 0.0 && x1 == 0.0 {
        (x2, Resolution::Assign(AssignRule::UseX2))
    } else if x3 == 0.0 && x2 == 0.0 {
        (x1, Resolution::Assign(AssignRule::UseX1))
    } else {
        (x3, Resolution::Defer)
    };

    Step {
        values: MonthValues {
            prob,
            x1,
            x2,
            x3,
            x,
        },
        next: SeverityState {
            x1,
            x2,
            x3,
            v: pv,
            prob,
        },
        resolution,
    }
}
