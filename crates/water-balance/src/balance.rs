//! Single-month two-layer bucket step.

use serde::Serialize;

/// Slack allowed on the layer bounds for accumulated rounding.
const BOUND_TOLERANCE: f64 = 1e-9;

/// Moisture held in the two soil layers (inches).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilState {
    /// Surface-layer content, in `[0, top capacity]`.
    pub ss: f64,
    /// Underlying-layer content, in `[0, awc]`.
    pub su: f64,
}

impl SoilState {
    /// Both layers at capacity.
    pub fn full(awc: f64, top_capacity: f64) -> Self {
        Self {
            ss: top_capacity,
            su: awc,
        }
    }

    /// Total available moisture SP = SS + SU.
    pub fn total(&self) -> f64 {
        self.ss + self.su
    }
}

/// Layer capacities for one site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacity {
    /// Underlying-layer capacity (AWC).
    pub awc: f64,
    /// Surface-layer capacity.
    pub top: f64,
}

impl Capacity {
    fn total(&self) -> f64 {
        self.awc + self.top
    }
}

/// Potential and actual water-balance terms for one month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthBalance {
    /// Potential recharge PR.
    pub pr: f64,
    /// Potential runoff PRO.
    pub pro: f64,
    /// Available moisture at the start of the month SP.
    pub sp: f64,
    /// Potential loss PL.
    pub pl: f64,
    /// Actual recharge R.
    pub r: f64,
    /// Actual runoff RO.
    pub ro: f64,
    /// Actual loss L.
    pub loss: f64,
    /// Actual evapotranspiration ET.
    pub et: f64,
    /// Soil state at the end of the month.
    pub end: SoilState,
}

/// Potential loss: PE if the surface layer covers it, otherwise the surface
/// layer plus a share of the underlying layer, capped at SP.
fn potential_loss(state: SoilState, pe: f64, capacity: Capacity) -> f64 {
    if state.ss >= pe {
        pe
    } else {
        ((pe - state.ss) * state.su / capacity.total() + state.ss).min(state.total())
    }
}

/// Advances the soil state by one month.
///
/// Surplus precipitation fills the surface layer, then the underlying layer,
/// and anything left runs off. A deficit is drawn from the surface layer first
/// and then from the underlying layer in proportion to its fill fraction.
pub fn balance_month(state: SoilState, precip: f64, pe: f64, capacity: Capacity) -> MonthBalance {
    let sp = state.total();
    let pr = capacity.total() - sp;
    let pro = sp;
    let pl = potential_loss(state, pe, capacity);

    let (r, ro, loss, et, end) = if precip >= pe {
        let excess = precip - pe;
        let surface_room = capacity.top - state.ss;
        if excess > surface_room {
            let rs = surface_room;
            let (ru, ro) = if excess - rs < capacity.awc - state.su {
                (excess - rs, 0.0)
            } else {
                let ru = capacity.awc - state.su;
                (ru, excess - rs - ru)
            };
            let end = SoilState {
                ss: capacity.top,
                su: state.su + ru,
            };
            (rs + ru, ro, 0.0, pe, end)
        } else {
            let end = SoilState {
                ss: state.ss + excess,
                su: state.su,
            };
            (excess, 0.0, 0.0, pe, end)
        }
    } else {
        let deficit = pe - precip;
        let (sl, ul) = if state.ss >= deficit {
            (deficit, 0.0)
        } else {
            let sl = state.ss;
            let ul = ((deficit - sl) * state.su / capacity.total()).min(state.su);
            (sl, ul)
        };
        let end = SoilState {
            ss: state.ss - sl,
            su: state.su - ul,
        };
        (0.0, 0.0, sl + ul, precip + sl + ul, end)
    };

    debug_assert!(
        end.ss >= -BOUND_TOLERANCE && end.ss <= capacity.top + BOUND_TOLERANCE,
        "surface layer out of bounds: {}",
        end.ss
    );
    debug_assert!(
        end.su >= -BOUND_TOLERANCE && end.su <= capacity.awc + BOUND_TOLERANCE,
        "underlying layer out of bounds: {}",
        end.su
    );

    MonthBalance {
        pr,
        pro,
        sp,
        pl,
        r,
        ro,
        loss,
        et,
        end,
    }
}
