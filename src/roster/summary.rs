//! Per-employee summaries of a generated roster.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ShiftAssignment, ShiftType};

/// Shift and hour totals for one employee in a roster period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAssignmentSummary {
    /// How many shifts the employee was assigned.
    pub total_shifts: usize,
    /// Total rostered hours.
    pub total_hours: Decimal,
    /// Assignment count per shift type.
    pub shift_types: BTreeMap<ShiftType, usize>,
}

/// Summarizes a roster period's assignments per employee.
///
/// # Example
///
/// ```
/// use roster_engine::roster::summarize_assignments;
///
/// let by_employee = summarize_assignments(&[]);
/// assert!(by_employee.is_empty());
/// ```
pub fn summarize_assignments(
    assignments: &[ShiftAssignment],
) -> BTreeMap<String, EmployeeAssignmentSummary> {
    let mut summaries: BTreeMap<String, EmployeeAssignmentSummary> = BTreeMap::new();

    for assignment in assignments {
        let summary = summaries.entry(assignment.employee_id.clone()).or_default();
        summary.total_shifts += 1;
        summary.total_hours += assignment.hours;
        *summary.shift_types.entry(assignment.shift_type).or_insert(0) += 1;
    }

    summaries
}
