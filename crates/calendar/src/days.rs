//! Gregorian month lengths.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Returns `true` if `year` is a Gregorian leap year.
///
/// Years outside the range chrono can represent are reported as non-leap.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Returns the number of days in a 1-indexed month of a Gregorian year.
///
/// February has 29 days in leap years.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12, or
/// [`CalendarError::InvalidYear`] if the year cannot be represented.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let first = NaiveDate::from_ymd_opt(year, u32::from(month), 1)
        .ok_or(CalendarError::InvalidYear { year })?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, u32::from(month) + 1, 1)
    }
    .ok_or(CalendarError::InvalidYear { year })?;

    Ok(next.signed_duration_since(first).num_days() as u8)
}
