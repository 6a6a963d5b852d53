//! Compliance evaluation over one employee's shift history.
//!
//! Runs every working-hours rule and aggregates the findings into a
//! [`ComplianceReport`]. The reference time is an explicit argument so that
//! callers (and tests) control what "now" means.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{ComplianceReport, ComplianceStatus, ShiftRecord};

use super::{
    check_fortnight_hours, check_night_recovery, check_rest_breaks, check_rest_days,
    check_weekly_hours,
};

/// Trailing-fortnight hours above which the approaching-limit warning fires.
pub const APPROACH_WARNING_HOURS: Decimal = Decimal::from_parts(65, 0, 0, false, 0);

/// Trailing-fortnight hours above which the urgent warning fires.
pub const URGENT_WARNING_HOURS: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Current consecutive nights from which the monitoring warning fires.
const NIGHT_MONITOR_THRESHOLD: usize = 5;

/// How many trailing shifts are inspected for the overtime fallback counter.
const OVERTIME_LOOKBACK_SHIFTS: usize = 5;

/// Evaluates one employee's shift history against every working-hours rule.
///
/// The history does not need to be pre-sorted; it is ordered by commencement
/// timestamp before evaluation. Output message ordering is fixed: fortnight,
/// break, night, rest-day, and weekly-hours violations, then night,
/// rest-day, and weekly-hours warnings, then the threshold warnings derived
/// from the trailing fortnight.
///
/// Identical history and identical `now` always produce identical output.
///
/// # Arguments
///
/// * `employee_id` - The employee the history belongs to
/// * `shifts` - The employee's shift history
/// * `now` - The reference time for trailing-fortnight accounting
pub fn evaluate(employee_id: &str, shifts: &[ShiftRecord], now: NaiveDateTime) -> ComplianceReport {
    if shifts.is_empty() {
        return ComplianceReport {
            employee_id: employee_id.to_string(),
            fortnight_hours: Decimal::ZERO,
            consecutive_shifts_without_break: 0,
            compliance_status: ComplianceStatus::Compliant,
            violations: Vec::new(),
            warnings: Vec::new(),
            last_check: now,
        };
    }

    let mut sorted: Vec<ShiftRecord> = shifts.to_vec();
    sorted.sort_by_key(|s| s.date);

    let fortnight_violations = check_fortnight_hours(&sorted);
    let break_violations = check_rest_breaks(&sorted);
    let night_findings = check_night_recovery(&sorted);
    let rest_findings = check_rest_days(&sorted);
    let hours_findings = check_weekly_hours(&sorted);

    // Hours worked in the trailing 14 calendar days.
    let fortnight_cutoff = now - Duration::days(14);
    let current_fortnight_hours: Decimal = sorted
        .iter()
        .filter(|s| s.date >= fortnight_cutoff)
        .map(|s| s.accountable_hours())
        .sum();

    // Night shifts currently being worked back to back.
    let current_consecutive_nights = sorted
        .iter()
        .rev()
        .take_while(|s| s.shift_type.is_night())
        .count();

    let mut violations = fortnight_violations;
    violations.extend(break_violations);
    violations.extend(night_findings.violations);
    violations.extend(rest_findings.violations);
    violations.extend(hours_findings.violations);

    let mut warnings = night_findings.warnings;
    warnings.extend(rest_findings.warnings);
    warnings.extend(hours_findings.warnings);

    if current_fortnight_hours > APPROACH_WARNING_HOURS {
        warnings.push(format!(
            "Approaching 76h limit: currently at {:.1}h this fortnight",
            current_fortnight_hours
        ));
    }
    if current_fortnight_hours > URGENT_WARNING_HOURS {
        warnings.push("URGENT: Exceeding safe working hours".to_string());
    }
    if current_consecutive_nights >= NIGHT_MONITOR_THRESHOLD {
        warnings.push(format!(
            "Currently working {} consecutive night shifts - monitor for recovery needs",
            current_consecutive_nights
        ));
    }

    let compliance_status = ComplianceStatus::from_messages(&violations, &warnings);

    let consecutive_shifts_without_break = if current_consecutive_nights > 0 {
        current_consecutive_nights
    } else {
        sorted
            .iter()
            .rev()
            .take(OVERTIME_LOOKBACK_SHIFTS)
            .filter(|s| s.overtime_hours > Decimal::ZERO)
            .count()
    };

    ComplianceReport {
        employee_id: employee_id.to_string(),
        fortnight_hours: current_fortnight_hours,
        consecutive_shifts_without_break,
        compliance_status,
        violations,
        warnings,
        last_check: now,
    }
}
