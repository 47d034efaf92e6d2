//! Month-by-month water-balance simulation.

use palmer_calendar::{is_missing, year_month};
use tracing::debug;

use crate::balance::{Capacity, SoilState, balance_month};
use crate::config::WaterBalanceConfig;
use crate::error::WaterBalanceError;
use crate::pet::monthly_potential_et;
use crate::result::WaterBalance;

/// Runs the two-layer water balance over a monthly series.
///
/// The series start in January of `config.start_year()`. Both layers start at
/// capacity. A month with missing precipitation or temperature yields NaN
/// terms and leaves the soil state as it was.
///
/// # Errors
///
/// - [`WaterBalanceError::EmptyData`] if the series are empty.
/// - [`WaterBalanceError::LengthMismatch`] if the series differ in length.
/// - [`WaterBalanceError::InvalidParameter`] if the configuration is invalid.
/// - [`WaterBalanceError::Calendar`] if a year leaves the calendar range.
#[tracing::instrument(skip(temp, precip, config), fields(n_months = precip.len()))]
pub fn simulate_water_balance(
    temp: &[f64],
    precip: &[f64],
    config: &WaterBalanceConfig,
) -> Result<WaterBalance, WaterBalanceError> {
    if precip.is_empty() {
        return Err(WaterBalanceError::EmptyData);
    }
    if temp.len() != precip.len() {
        return Err(WaterBalanceError::LengthMismatch {
            expected: precip.len(),
            got: temp.len(),
            field: "temp".to_string(),
        });
    }
    config.validate()?;

    let soil = config.soil();
    let capacity = Capacity {
        awc: soil.awc(),
        top: config.top_capacity(),
    };
    let neg_tan_lat = config.neg_tan_lat();
    let initial = SoilState::full(capacity.awc, capacity.top);

    let mut out = WaterBalance::with_capacity(
        config.start_year(),
        capacity.awc,
        capacity.top,
        initial,
        precip.len(),
    );
    let mut state = initial;
    let mut n_missing = 0usize;

    for (i, (&t, &p)) in temp.iter().zip(precip).enumerate() {
        if is_missing(t) || is_missing(p) {
            out.push_missing(t, p);
            n_missing += 1;
            continue;
        }
        let (year, month) = year_month(config.start_year(), i);
        let pe = monthly_potential_et(t, year, month, neg_tan_lat, soil.b(), soil.h())?;
        let month_balance = balance_month(state, p, pe, capacity);
        out.push(t, p, pe, &month_balance);
        state = month_balance.end;
    }

    debug!(
        n_months = out.len(),
        n_missing,
        final_ss = state.ss,
        final_su = state.su,
        "water balance complete"
    );

    Ok(out)
}
