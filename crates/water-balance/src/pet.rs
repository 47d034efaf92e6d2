//! Thornthwaite potential evapotranspiration.
//!
//! Temperatures are in °F and results in inches. The daily rate is scaled
//! by a daylength factor derived from latitude and calendar month, then
//! multiplied by the number of days in the month.

use palmer_calendar::days_in_month;

use crate::error::WaterBalanceError;

/// Solar declination term per calendar month, combined with the negative
/// tangent of latitude to give the daylength factor.
const PHI: [f64; 12] = [
    -0.3865982,
    -0.2316132,
    -0.0378180,
    0.1715539,
    0.3458803,
    0.4308320,
    0.3916645,
    0.2452467,
    0.0535511,
    -0.15583436,
    -0.3340551,
    -0.4310691,
];

/// Below or at this temperature there is no evapotranspiration.
const FREEZING_F: f64 = 32.0;

/// At or above this temperature the sine-based form is used.
const HOT_F: f64 = 80.0;

/// Daylength factor for a 1-indexed month (1..=12) and negative tangent of
/// latitude.
///
/// Beyond the polar circles the hour-angle argument is clamped, which yields
/// the polar-night and midnight-sun limits.
pub fn daylength_factor(month: u8, neg_tan_lat: f64) -> f64 {
    let dum = PHI[usize::from(month.clamp(1, 12)) - 1] * neg_tan_lat;
    let mut dk = ((1.0 - dum * dum).max(0.0).sqrt() / dum).atan();
    if dk < 0.0 || dum < 0.0 {
        dk += 3.141593;
    }
    (dk + 0.0157) / 1.57
}

/// Daily potential evapotranspiration (inches/day) for a 1-indexed month.
///
/// Returns NaN for a NaN temperature.
pub fn daily_potential_et(temp_f: f64, month: u8, neg_tan_lat: f64, b: f64, h: f64) -> f64 {
    if temp_f.is_nan() {
        return f64::NAN;
    }
    if temp_f <= FREEZING_F {
        return 0.0;
    }
    let dk = daylength_factor(month, neg_tan_lat);
    if temp_f >= HOT_F {
        ((temp_f / 57.3 - 0.166).sin() - 0.76) * dk
    } else {
        (-3.863233 + b * 1.715598 - b * h.ln() + b * (temp_f - FREEZING_F).ln()).exp() * dk
    }
}

/// Monthly potential evapotranspiration (inches) for a given year and month.
///
/// # Errors
///
/// Returns [`WaterBalanceError::Calendar`] if `month` is outside 1..=12 or
/// `year` is not representable.
pub fn monthly_potential_et(
    temp_f: f64,
    year: i32,
    month: u8,
    neg_tan_lat: f64,
    b: f64,
    h: f64,
) -> Result<f64, WaterBalanceError> {
    let days = days_in_month(year, month)?;
    Ok(daily_potential_et(temp_f, month, neg_tan_lat, b, h) * f64::from(days))
}
