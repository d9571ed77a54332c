use crate::error::{Result, SummaryError};
use crate::structs::Extremum;
use crate::transform::round_half_even_1dp;

/// Calculates the arithmetic mean of a sequence.
///
/// No rounding is applied; callers round as needed.
///
/// # Errors
///
/// Returns `SummaryError::Data` if the sequence is empty.
pub fn calculate_mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(SummaryError::Data(
            "cannot take the mean of an empty sequence".to_string(),
        ));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Finds the minimum value and its reported position.
///
/// Returns `None` for an empty sequence. The value is rounded to one
/// decimal place. The reported index is the first occurrence, EXCEPT when
/// the minimum occurs exactly twice: then it is the mirrored position
/// `len - first_occurrence - 1`, which matches neither occurrence in
/// general. This two-way-tie behaviour is long-standing and callers depend
/// on it; do not change it without revisiting `summary`'s own
/// first-occurrence date lookup.
pub fn find_min(values: &[f64]) -> Option<Extremum> {
    let mut min = *values.first()?;
    for &v in &values[1..] {
        if v < min {
            min = v;
        }
    }
    let first_index = values.iter().position(|&v| v == min)?;
    let count = values.iter().filter(|&&v| v == min).count();
    let index = if count == 2 {
        values.len() - first_index - 1
    } else {
        first_index
    };
    Some(Extremum {
        value: round_half_even_1dp(min),
        index,
    })
}

/// Finds the maximum value and its reported position.
///
/// Mirror of `find_min`, with one difference carried over from the
/// original behaviour: the two-way-tie position is
/// `len - first_occurrence - 2` (off by one from the minimum's formula).
pub fn find_max(values: &[f64]) -> Option<Extremum> {
    let mut max = *values.first()?;
    for &v in &values[1..] {
        if v > max {
            max = v;
        }
    }
    let first_index = values.iter().position(|&v| v == max)?;
    let count = values.iter().filter(|&&v| v == max).count();
    let index = if count == 2 {
        values.len() - first_index - 2
    } else {
        first_index
    };
    Some(Extremum {
        value: round_half_even_1dp(max),
        index,
    })
}
