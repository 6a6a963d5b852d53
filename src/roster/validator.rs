//! Post-hoc compliance audit of a generated roster.
//!
//! The validator checks whole-period totals per employee. This is a coarser
//! accounting than the sliding windows of [`crate::compliance::evaluate`]:
//! the two passes are deliberately separate operations with their own
//! semantics, and callers depend on each one's specific behavior.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{ComplianceSummary, ShiftAssignment};

/// Maximum hours one employee may work across the period.
const PERIOD_HOUR_LIMIT: Decimal = Decimal::from_parts(76, 0, 0, false, 0);

/// Hours above which an employee draws an approaching-limit warning.
const PERIOD_HOUR_WARNING: Decimal = Decimal::from_parts(65, 0, 0, false, 0);

/// Consecutive nights above which an employee is in violation.
const NIGHT_RUN_LIMIT: usize = 7;

/// Consecutive nights above which an employee draws a warning.
const NIGHT_RUN_WARNING: usize = 5;

/// Rest days below which an employee is in violation, assuming a fortnight
/// period.
const MIN_REST_DAYS: i64 = 4;

/// Days in the assumed roster period.
const PERIOD_DAYS: i64 = 14;

/// Audits all assignments of one roster period.
///
/// Assignments are grouped per employee and checked for:
/// - total hours over the whole period (> 76 violation, > 65 warning);
/// - the longest consecutive night-shift run in date order (> 7 violation,
///   > 5 warning);
/// - rest days approximated as `14 - shift count` (< 4 violation; the
///   approximation assumes a one-fortnight period).
///
/// # Arguments
///
/// * `assignments` - Every assignment belonging to one roster period
///
/// # Example
///
/// ```
/// use roster_engine::roster::validate_roster_compliance;
///
/// let summary = validate_roster_compliance(&[]);
/// assert!(!summary.has_violations);
/// assert_eq!(summary.employees_checked, 0);
/// ```
pub fn validate_roster_compliance(assignments: &[ShiftAssignment]) -> ComplianceSummary {
    let mut violations = Vec::new();
    let mut warnings = Vec::new();

    // BTreeMap keeps the per-employee check order deterministic.
    let mut by_employee: BTreeMap<&str, Vec<&ShiftAssignment>> = BTreeMap::new();
    for assignment in assignments {
        by_employee
            .entry(assignment.employee_id.as_str())
            .or_default()
            .push(assignment);
    }

    for (employee_id, employee_assignments) in &by_employee {
        let total_hours: Decimal = employee_assignments.iter().map(|a| a.hours).sum();
        if total_hours > PERIOD_HOUR_LIMIT {
            violations.push(format!(
                "Employee {}: {}h exceeds 76h limit",
                employee_id,
                total_hours.normalize()
            ));
        } else if total_hours > PERIOD_HOUR_WARNING {
            warnings.push(format!(
                "Employee {}: {}h approaching 76h limit",
                employee_id,
                total_hours.normalize()
            ));
        }

        let mut sorted = employee_assignments.clone();
        sorted.sort_by_key(|a| a.date);

        let mut consecutive_nights = 0usize;
        let mut max_consecutive = 0usize;
        for assignment in &sorted {
            if assignment.shift_type.is_night() {
                consecutive_nights += 1;
                max_consecutive = max_consecutive.max(consecutive_nights);
            } else {
                consecutive_nights = 0;
            }
        }

        if max_consecutive > NIGHT_RUN_LIMIT {
            violations.push(format!(
                "Employee {}: {} consecutive night shifts",
                employee_id, max_consecutive
            ));
        } else if max_consecutive > NIGHT_RUN_WARNING {
            warnings.push(format!(
                "Employee {}: {} consecutive night shifts",
                employee_id, max_consecutive
            ));
        }

        let rest_days = PERIOD_DAYS - employee_assignments.len() as i64;
        if rest_days < MIN_REST_DAYS {
            violations.push(format!(
                "Employee {}: Only {} rest days",
                employee_id, rest_days
            ));
        }
    }

    ComplianceSummary {
        has_violations: !violations.is_empty(),
        has_warnings: !warnings.is_empty(),
        violations,
        warnings,
        employees_checked: by_employee.len(),
    }
}
