//! Day-by-day greedy roster allocation.
//!
//! The allocator walks each day of the period and each shift type in a fixed
//! order, builds the eligible candidate set, ranks it with the scorer, and
//! assigns the top candidates up to the required coverage. It is single-pass
//! and non-backtracking: earlier days are never revisited when later days
//! run short of candidates, and under-coverage is accepted silently.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::RosterGenerationConfig;
use crate::models::{Employee, RosterPeriod, ShiftAssignment, ShiftType};

use super::{preference_score, workload_balance_score};

/// Per-employee running totals for one generation run.
#[derive(Debug, Clone, Default)]
struct EmployeeRunState {
    hours: Decimal,
    consecutive_nights: u32,
    last_shift_end: Option<&'static str>,
}

/// Running allocation state owned by a single generation call.
///
/// Created at call start and discarded at call end; never shared across
/// concurrent generation calls.
#[derive(Debug, Default)]
pub struct AllocationState {
    employees: HashMap<String, EmployeeRunState>,
}

impl AllocationState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the hours assigned to an employee so far in this run.
    pub fn hours(&self, employee_id: &str) -> Decimal {
        self.employees
            .get(employee_id)
            .map(|r| r.hours)
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the employee's current consecutive-night count in this run.
    pub fn consecutive_nights(&self, employee_id: &str) -> u32 {
        self.employees
            .get(employee_id)
            .map(|r| r.consecutive_nights)
            .unwrap_or(0)
    }

    /// Returns true if the employee may take a shift of the given type.
    ///
    /// Three hard constraints apply:
    /// - the projected run hours must not exceed the fortnight cap;
    /// - night candidates must be under the consecutive-night cap;
    /// - an employee whose previous shift ended at "06:00" may not start
    ///   another at "06:00". This is a literal time-of-day comparison, not
    ///   elapsed hours: the only shift ending at 06:00 is the night shift.
    pub fn is_eligible(
        &self,
        employee_id: &str,
        shift_type: ShiftType,
        config: &RosterGenerationConfig,
    ) -> bool {
        let record = match self.employees.get(employee_id) {
            Some(record) => record,
            None => return true,
        };

        if record.hours + shift_type.hours() > config.max_fortnight_hours {
            return false;
        }

        if shift_type.is_night()
            && record.consecutive_nights >= config.max_consecutive_nights.max(0) as u32
        {
            return false;
        }

        if let Some(last_end) = record.last_shift_end {
            if last_end == "06:00" && shift_type.start_time() == "06:00" {
                return false;
            }
        }

        true
    }

    /// Records an assignment: running hours grow by the shift length, the
    /// consecutive-night counter increments on night shifts and resets
    /// otherwise.
    pub fn record_assignment(&mut self, employee_id: &str, shift_type: ShiftType) {
        let record = self.employees.entry(employee_id.to_string()).or_default();
        record.hours += shift_type.hours();
        if shift_type.is_night() {
            record.consecutive_nights += 1;
        } else {
            record.consecutive_nights = 0;
        }
        record.last_shift_end = Some(shift_type.end_time());
    }
}

/// Returns how many employees a shift type needs on the given day.
fn required_coverage(
    shift_type: ShiftType,
    date: NaiveDateTime,
    config: &RosterGenerationConfig,
) -> usize {
    let weekday = date.weekday();
    let is_weekend = matches!(weekday, Weekday::Sat | Weekday::Sun);

    let required = match shift_type {
        ShiftType::Early => 2,
        ShiftType::Late => 2,
        ShiftType::Night => 1,
        ShiftType::Van => config.min_van_coverage.max(0) as usize,
        ShiftType::Watchhouse => config.min_watchhouse_coverage.max(0) as usize,
        ShiftType::Corro => {
            if weekday.num_days_from_monday() < 5 {
                1
            } else {
                0
            }
        }
    };

    // Corro never runs on weekends, independent of the weekday rule above.
    if is_weekend && shift_type == ShiftType::Corro {
        return 0;
    }

    required
}

/// Generates shift assignments for every day of a roster period.
///
/// For each day in `[period.start_date, period.end_date)` and each shift
/// type in fixed order, the eligible candidates are scored, stable-sorted
/// descending, and the top `required` are assigned. When fewer candidates
/// are eligible than required, all of them are assigned and the remaining
/// slots stay unfilled.
///
/// # Arguments
///
/// * `period` - The roster period being generated
/// * `employees` - The station's employee snapshot
/// * `config` - The generation configuration (assumed validated)
pub fn allocate_assignments(
    period: &RosterPeriod,
    employees: &[Employee],
    config: &RosterGenerationConfig,
) -> Vec<ShiftAssignment> {
    let mut state = AllocationState::new();
    let mut assignments = Vec::new();

    let mut current_date = period.start_date;
    while current_date < period.end_date {
        for shift_type in ShiftType::ALL {
            let required = required_coverage(shift_type, current_date, config);
            if required == 0 {
                continue;
            }

            let mut candidates: Vec<(&Employee, Decimal)> = employees
                .iter()
                .filter(|employee| state.is_eligible(&employee.id, shift_type, config))
                .map(|employee| {
                    let score = preference_score(employee, shift_type, current_date)
                        + workload_balance_score(employee, shift_type);
                    (employee, score)
                })
                .collect();

            // Stable sort: equal scores keep candidate-list order.
            candidates.sort_by(|a, b| b.1.cmp(&a.1));

            for (employee, score) in candidates.into_iter().take(required) {
                assignments.push(ShiftAssignment {
                    id: Uuid::new_v4().to_string(),
                    roster_period_id: period.id.clone(),
                    employee_id: employee.id.clone(),
                    date: current_date,
                    shift_type,
                    start_time: shift_type.start_time().to_string(),
                    end_time: shift_type.end_time().to_string(),
                    hours: shift_type.hours(),
                    is_overtime: false,
                    assigned_by: "system".to_string(),
                    assignment_reason: format!("automatic_allocation_score_{:.1}", score),
                });
                state.record_assignment(&employee.id, shift_type);
            }
        }

        current_date += Duration::days(1);
    }

    assignments
}
