//! Night-shift recovery rule.
//!
//! A streak of consecutive night shifts resets on the first non-night shift.
//! Six in a row draws a warning; from the seventh on, the following shift
//! must start at least 24 hours later, and a streak still open at the end of
//! history requires immediate recovery.

use rust_decimal::Decimal;

use crate::models::ShiftRecord;

use super::{hours_between, RuleFindings};

/// Recovery time required after seven or more consecutive nights, in hours.
pub const NIGHT_RECOVERY_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Streak length at which the approaching-limit warning fires.
const WARNING_STREAK: usize = 6;

/// Streak length from which recovery is mandatory.
const RECOVERY_STREAK: usize = 7;

/// Checks night-shift recovery over a sorted shift history.
///
/// # Arguments
///
/// * `shifts` - The employee's shift history, sorted ascending by date
pub fn check_night_recovery(shifts: &[ShiftRecord]) -> RuleFindings {
    let mut findings = RuleFindings::default();
    let mut consecutive_nights = 0usize;

    for (i, shift) in shifts.iter().enumerate() {
        if shift.shift_type.is_night() {
            consecutive_nights += 1;

            if consecutive_nights == WARNING_STREAK {
                findings.warnings.push(
                    "Approaching 7 consecutive night shifts - recovery period required after next night shift"
                        .to_string(),
                );
            }

            if consecutive_nights >= RECOVERY_STREAK {
                match shifts.get(i + 1) {
                    Some(next) => {
                        let gap = hours_between(shift.date, next.date);
                        if gap < NIGHT_RECOVERY_HOURS {
                            findings.violations.push(format!(
                                "7+ consecutive night shifts without 24h recovery - ended {}",
                                shift.date.format("%Y-%m-%d")
                            ));
                        }
                    }
                    None => {
                        // Streak still open: the employee is in violation now.
                        findings.violations.push(format!(
                            "Currently working {} consecutive night shifts - immediate 24h recovery required",
                            consecutive_nights
                        ));
                    }
                }
            }
        } else {
            consecutive_nights = 0;
        }
    }

    findings
}
