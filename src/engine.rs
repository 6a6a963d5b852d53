//! Exposed engine operations.
//!
//! These functions wire the pure algorithmic core (allocator, evaluator,
//! validator) to a [`RosterStore`]. Each call operates only on its input
//! snapshot and produces fresh output; no mutable state survives the call.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::compliance;
use crate::config::RosterGenerationConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{ComplianceReport, ComplianceSummary, RosterPeriod, RosterStatus, ShiftAssignment};
use crate::roster::{
    allocate_assignments, summarize_assignments, validate_roster_compliance,
    EmployeeAssignmentSummary,
};
use crate::storage::RosterStore;

/// How far back shift history is fetched for a compliance evaluation.
const HISTORY_LOOKBACK_DAYS: i64 = 28;

/// The result of one roster generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterGeneration {
    /// The created draft roster period.
    pub roster_period_id: String,
    /// First day of the period (inclusive).
    pub period_start: NaiveDateTime,
    /// Day after the last rostered day (exclusive).
    pub period_end: NaiveDateTime,
    /// How many assignments were created.
    pub total_assignments: usize,
    /// Status of the new period (always draft at generation time).
    pub status: RosterStatus,
    /// The validator's audit of the generated assignments.
    pub compliance_summary: ComplianceSummary,
    /// Per-employee shift and hour totals.
    pub assignments_by_employee: BTreeMap<String, EmployeeAssignmentSummary>,
    /// The generated assignments.
    pub assignments: Vec<ShiftAssignment>,
}

/// Generates a draft roster for one station and period.
///
/// Validates the config, snapshots the station's active employees, creates
/// a draft roster period of `config.period_weeks` weeks from `period_start`,
/// allocates assignments, persists them, and audits the result. The audit is
/// informational here: a draft is created even when it carries violations,
/// and the publication gate is where violations become hard failures.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfig`] for a malformed config, or any
/// error the store reports.
pub fn generate_roster(
    store: &dyn RosterStore,
    config: &RosterGenerationConfig,
    period_start: NaiveDate,
) -> EngineResult<RosterGeneration> {
    config.validate()?;

    let start_date = period_start.and_time(NaiveTime::MIN);
    let end_date = start_date + Duration::weeks(config.period_weeks as i64);

    let employees = store.list_active_employees(&config.station)?;
    let period = store.create_roster_period(&config.station, start_date, end_date)?;

    let assignments = allocate_assignments(&period, &employees, config);
    store.bulk_insert_assignments(&assignments)?;

    let compliance_summary = validate_roster_compliance(&assignments);
    let assignments_by_employee = summarize_assignments(&assignments);

    info!(
        roster_period_id = %period.id,
        station = %config.station,
        employees = employees.len(),
        assignments = assignments.len(),
        has_violations = compliance_summary.has_violations,
        "Roster generated"
    );

    Ok(RosterGeneration {
        roster_period_id: period.id,
        period_start: start_date,
        period_end: end_date,
        total_assignments: assignments.len(),
        status: RosterStatus::Draft,
        compliance_summary,
        assignments_by_employee,
        assignments,
    })
}

/// Evaluates one employee's recorded shift history against the
/// working-hours rules.
///
/// History is fetched from the store for the four weeks preceding `now`.
/// The reference time is an explicit argument so callers control
/// determinism.
///
/// # Errors
///
/// Returns [`EngineError::EmployeeNotFound`] for an unknown employee.
pub fn evaluate_employee_compliance(
    store: &dyn RosterStore,
    employee_id: &str,
    now: NaiveDateTime,
) -> EngineResult<ComplianceReport> {
    let employee = store.employee(employee_id)?;
    let since = now - Duration::days(HISTORY_LOOKBACK_DAYS);
    let history = store.shift_history(&employee.id, since)?;
    Ok(compliance::evaluate(&employee.id, &history, now))
}

/// Audits a set of roster assignments.
///
/// A thin, pure re-export of the roster validator for callers that already
/// hold the assignments.
pub fn validate_assignments(assignments: &[ShiftAssignment]) -> ComplianceSummary {
    validate_roster_compliance(assignments)
}

/// Publishes a draft roster.
///
/// The roster's assignments are re-audited first; any violation blocks the
/// transition and the status stays unchanged. On success the period moves
/// `Draft -> Published`.
///
/// # Errors
///
/// - [`EngineError::RosterPeriodNotFound`] for an unknown period.
/// - [`EngineError::ComplianceViolation`] when the audit reports violations.
/// - [`EngineError::InvalidStatusTransition`] when the period is not a
///   draft.
pub fn publish_roster(
    store: &dyn RosterStore,
    roster_period_id: &str,
) -> EngineResult<RosterPeriod> {
    let mut period = store.roster_period(roster_period_id)?;
    let assignments = store.assignments_for_period(roster_period_id)?;

    let summary = validate_roster_compliance(&assignments);
    if summary.has_violations {
        return Err(EngineError::ComplianceViolation {
            roster_period_id: roster_period_id.to_string(),
            violations: summary.violations,
        });
    }

    period.status = period.status.transition_to(RosterStatus::Published)?;
    store.update_roster_status(roster_period_id, period.status)?;

    info!(roster_period_id = %period.id, "Roster published");
    Ok(period)
}
