//! Candidate scoring for roster allocation.
//!
//! Scores are comparison keys only: the allocator stable-sorts candidates
//! descending by score, so ties resolve by candidate-list order.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{Employee, ShiftType};

/// The starting score every candidate receives before adjustments.
pub const BASE_SCORE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Night-tolerance level at which night shifts become preferred.
const NIGHT_PREFERENCE_TOLERANCE: i32 = 6;

/// Scores how well a shift suits an employee's preferences.
///
/// Adjustments to the base score of 50:
/// - night shifts: tolerance 0 subtracts 30, tolerance 6 or higher adds 20;
/// - recall willingness adds 10;
/// - a shift falling on a preferred rest day subtracts 25.
///
/// # Example
///
/// ```
/// use roster_engine::models::{Employee, ShiftPreferences, ShiftType};
/// use roster_engine::roster::preference_score;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     service_number: "VP12345".to_string(),
///     name: "Emma Wilson".to_string(),
///     station: "geelong".to_string(),
///     rank: "Constable".to_string(),
///     seniority_years: 3,
///     preferences: ShiftPreferences::default(),
///     active: true,
/// };
/// // A Monday early shift for an employee with default preferences:
/// // base 50 + recall willingness 10.
/// let date = NaiveDateTime::parse_from_str("2026-03-02 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(
///     preference_score(&employee, ShiftType::Early, date),
///     Decimal::new(60, 0)
/// );
/// ```
pub fn preference_score(employee: &Employee, shift_type: ShiftType, date: NaiveDateTime) -> Decimal {
    let preferences = &employee.preferences;
    let mut score = BASE_SCORE;

    if shift_type.is_night() {
        if preferences.night_shift_tolerance == 0 {
            score -= Decimal::new(30, 0);
        } else if preferences.night_shift_tolerance >= NIGHT_PREFERENCE_TOLERANCE {
            score += Decimal::new(20, 0);
        }
    }

    if preferences.recall_willingness {
        score += Decimal::new(10, 0);
    }

    if preferences.prefers_rest_on(date.weekday()) {
        score -= Decimal::new(25, 0);
    }

    score
}

/// Scores workload balance for an employee and shift type.
///
/// Currently a flat constant: every candidate receives the same balance
/// contribution, so ranking is driven by preferences alone. This is the
/// extension point for a true workload-variance term; changing it changes
/// ranking outcomes, so any replacement must be rolled out deliberately.
pub fn workload_balance_score(_employee: &Employee, _shift_type: ShiftType) -> Decimal {
    Decimal::new(25, 0)
}
