//! Minimum rest break between consecutive shifts.
//!
//! Each pair of consecutive shifts must be at least 10 hours apart, measured
//! between commencement timestamps.

use rust_decimal::Decimal;

use crate::models::ShiftRecord;

use super::hours_between;

/// Minimum gap required between consecutive shifts, in hours.
pub const MIN_REST_BREAK_HOURS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Checks the 10-hour break rule over a sorted shift history.
///
/// # Arguments
///
/// * `shifts` - The employee's shift history, sorted ascending by date
///
/// # Returns
///
/// One violation per consecutive pair closer than 10 hours, naming the gap
/// and the date of the second shift.
pub fn check_rest_breaks(shifts: &[ShiftRecord]) -> Vec<String> {
    let mut violations = Vec::new();

    for pair in shifts.windows(2) {
        let gap = hours_between(pair[0].date, pair[1].date);
        if gap < MIN_REST_BREAK_HOURS {
            violations.push(format!(
                "Only {:.1}h break between shifts on {}",
                gap,
                pair[1].date.format("%Y-%m-%d")
            ));
        }
    }

    violations
}
