use crate::error::{Result, SummaryError};
use chrono::NaiveDate;
use std::fmt::Display;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DEGREE_SYMBOL: &str = "°C";

/// Renders a temperature as a display string with the degree-Celsius suffix.
///
/// No rounding is performed here; callers round before formatting.
pub fn format_temperature(temp: impl Display) -> String {
    format!("{temp}{DEGREE_SYMBOL}")
}

/// Converts an ISO-8601 date/time string into a human readable date.
///
/// Only the first 10 characters (`YYYY-MM-DD`) are used; any trailing time
/// or offset is ignored. The output looks like `Tuesday 06 July 2021`.
///
/// # Errors
///
/// Returns `SummaryError::Data` if the string is shorter than 10 characters
/// and `SummaryError::Date` if the prefix is not a valid calendar date.
pub fn convert_date(iso_string: &str) -> Result<String> {
    let prefix = iso_string.get(0..10).ok_or_else(|| {
        SummaryError::Data(format!("date string too short: {iso_string:?}"))
    })?;
    let date = NaiveDate::parse_from_str(prefix, DATE_FORMAT)?;
    Ok(date.format("%A %d %B %Y").to_string())
}

/// Converts a Fahrenheit temperature to Celsius, rounded to one decimal
/// place with round-half-to-even.
pub fn convert_f_to_c(temp_in_fahrenheit: f64) -> f64 {
    round_half_even_1dp((temp_in_fahrenheit - 32.0) * 5.0 / 9.0)
}

/// Round-half-to-even at one decimal place.
pub(crate) fn round_half_even_1dp(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
