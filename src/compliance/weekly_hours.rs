//! Maximum weekly working-hours rule.
//!
//! No more than 60 hours may be worked in any 7-day window, and exceeding
//! the cap must be followed by a 48-hour break after the window ends.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::models::ShiftRecord;

use super::{hours_between, RuleFindings};

/// Maximum hours permitted in any 7-day window.
pub const WEEKLY_HOUR_LIMIT: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Break required after a window that exceeded the weekly cap, in hours.
const POST_OVERLOAD_BREAK_HOURS: Decimal = Decimal::from_parts(48, 0, 0, false, 0);

/// Length of the sliding window in days.
const WINDOW_DAYS: i64 = 7;

/// Checks the 60-hour week and follow-up 48-hour break over a sorted shift
/// history.
///
/// A 7-day window is anchored at each shift's commencement. Any window over
/// 60 hours is a violation; if the first shift at or after that window's end
/// starts less than 48 hours later, a second violation is reported.
///
/// # Arguments
///
/// * `shifts` - The employee's shift history, sorted ascending by date
pub fn check_weekly_hours(shifts: &[ShiftRecord]) -> RuleFindings {
    let mut findings = RuleFindings::default();

    for shift in shifts {
        let window_start = shift.date;
        let window_end = window_start + Duration::days(WINDOW_DAYS);

        let total: Decimal = shifts
            .iter()
            .filter(|s| s.date >= window_start && s.date < window_end)
            .map(|s| s.accountable_hours())
            .sum();

        if total > WEEKLY_HOUR_LIMIT {
            findings.violations.push(format!(
                "Exceeded 60h in 7 days: {:.1}h starting {}",
                total,
                window_start.format("%Y-%m-%d")
            ));

            if let Some(next) = shifts.iter().find(|s| s.date >= window_end) {
                if hours_between(window_end, next.date) < POST_OVERLOAD_BREAK_HOURS {
                    findings
                        .violations
                        .push("No 48h break after exceeding 60h weekly limit".to_string());
                }
            }
        }
    }

    findings
}
