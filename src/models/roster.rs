//! Roster period and assignment models.
//!
//! This module contains the [`RosterPeriod`] lifecycle state machine and the
//! [`ShiftAssignment`] records produced by the allocation engine.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::ShiftType;

/// Lifecycle status of a roster period.
///
/// Transitions are monotonic: `Draft -> Published -> Approved -> Archived`.
/// A published roster can never return to draft.
///
/// # Example
///
/// ```
/// use roster_engine::models::RosterStatus;
///
/// assert!(RosterStatus::Draft.can_transition_to(RosterStatus::Published));
/// assert!(!RosterStatus::Published.can_transition_to(RosterStatus::Draft));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterStatus {
    /// Freshly generated, editable, not yet visible to members.
    Draft,
    /// Published to members; requires a violation-free compliance summary.
    Published,
    /// Approved by a supervisor after publication.
    Approved,
    /// Archived after the period has passed.
    Archived,
}

impl RosterStatus {
    /// Returns true if the state machine allows moving to `next`.
    pub fn can_transition_to(&self, next: RosterStatus) -> bool {
        matches!(
            (self, next),
            (RosterStatus::Draft, RosterStatus::Published)
                | (RosterStatus::Published, RosterStatus::Approved)
                | (RosterStatus::Approved, RosterStatus::Archived)
        )
    }

    /// Validates a transition to `next`, returning it on success.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStatusTransition`] for any transition
    /// the state machine forbids, including backward moves.
    pub fn transition_to(&self, next: RosterStatus) -> EngineResult<RosterStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(EngineError::InvalidStatusTransition {
                from: *self,
                to: next,
            })
        }
    }
}

impl std::fmt::Display for RosterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RosterStatus::Draft => "draft",
            RosterStatus::Published => "published",
            RosterStatus::Approved => "approved",
            RosterStatus::Archived => "archived",
        };
        write!(f, "{}", name)
    }
}

/// A rostering period for one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPeriod {
    /// Unique identifier for the roster period.
    pub id: String,
    /// The station this roster belongs to.
    pub station: String,
    /// The first day of the period (inclusive).
    pub start_date: NaiveDateTime,
    /// The day after the last rostered day (exclusive).
    pub end_date: NaiveDateTime,
    /// Current lifecycle status.
    pub status: RosterStatus,
}

/// A single shift allocated to an employee by the allocation engine.
///
/// Assignments are created once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Unique identifier for the assignment.
    pub id: String,
    /// The roster period this assignment belongs to.
    pub roster_period_id: String,
    /// The employee assigned.
    pub employee_id: String,
    /// The day of the shift.
    pub date: NaiveDateTime,
    /// The type of shift assigned.
    pub shift_type: ShiftType,
    /// The start time-of-day (e.g., "06:00").
    pub start_time: String,
    /// The end time-of-day (e.g., "14:00").
    pub end_time: String,
    /// Rostered hours for the shift.
    pub hours: Decimal,
    /// Whether the shift was rostered as overtime.
    #[serde(default)]
    pub is_overtime: bool,
    /// Who created the assignment ("system" for automatic allocation).
    pub assigned_by: String,
    /// Free-text tag recording why the assignment was made.
    pub assignment_reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_allowed() {
        assert!(RosterStatus::Draft.can_transition_to(RosterStatus::Published));
        assert!(RosterStatus::Published.can_transition_to(RosterStatus::Approved));
        assert!(RosterStatus::Approved.can_transition_to(RosterStatus::Archived));
    }

    #[test]
    fn test_backward_transitions_rejected() {
        assert!(!RosterStatus::Published.can_transition_to(RosterStatus::Draft));
        assert!(!RosterStatus::Approved.can_transition_to(RosterStatus::Published));
        assert!(!RosterStatus::Archived.can_transition_to(RosterStatus::Draft));
    }

    #[test]
    fn test_skipping_states_rejected() {
        assert!(!RosterStatus::Draft.can_transition_to(RosterStatus::Approved));
        assert!(!RosterStatus::Draft.can_transition_to(RosterStatus::Archived));
        assert!(!RosterStatus::Published.can_transition_to(RosterStatus::Archived));
    }

    #[test]
    fn test_self_transition_rejected() {
        assert!(!RosterStatus::Draft.can_transition_to(RosterStatus::Draft));
        assert!(!RosterStatus::Published.can_transition_to(RosterStatus::Published));
    }

    #[test]
    fn test_transition_to_returns_error_with_states() {
        let result = RosterStatus::Published.transition_to(RosterStatus::Draft);
        match result {
            Err(EngineError::InvalidStatusTransition { from, to }) => {
                assert_eq!(from, RosterStatus::Published);
                assert_eq!(to, RosterStatus::Draft);
            }
            other => panic!("expected InvalidStatusTransition, got {:?}", other),
        }
    }

    #[test]
    fn test_transition_to_succeeds_forward() {
        let next = RosterStatus::Draft
            .transition_to(RosterStatus::Published)
            .unwrap();
        assert_eq!(next, RosterStatus::Published);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&RosterStatus::Published).unwrap(),
            "\"published\""
        );
        let parsed: RosterStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(parsed, RosterStatus::Archived);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", RosterStatus::Draft), "draft");
        assert_eq!(format!("{}", RosterStatus::Published), "published");
    }

    #[test]
    fn test_assignment_round_trip() {
        let assignment = ShiftAssignment {
            id: "asg_001".to_string(),
            roster_period_id: "rp_001".to_string(),
            employee_id: "emp_001".to_string(),
            date: NaiveDateTime::parse_from_str("2026-03-02 00:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            shift_type: ShiftType::Van,
            start_time: "06:00".to_string(),
            end_time: "14:00".to_string(),
            hours: Decimal::new(80, 1),
            is_overtime: false,
            assigned_by: "system".to_string(),
            assignment_reason: "automatic_allocation_score_85.0".to_string(),
        };

        let json = serde_json::to_string(&assignment).unwrap();
        let deserialized: ShiftAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(assignment, deserialized);
    }
}
