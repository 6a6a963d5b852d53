//! Storage port for the roster engine.
//!
//! The engine consumes persistence through the [`RosterStore`] trait so the
//! algorithmic core stays independent of any database. [`InMemoryStore`] is
//! the reference implementation used by tests, benches, and embedding
//! callers that keep everything in process.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, RosterPeriod, RosterStatus, ShiftAssignment, ShiftRecord};

/// Persistence contract consumed by the engine.
///
/// Implementations are expected to be cheap snapshots: the engine reads
/// everything it needs up front and never holds a call open across its own
/// computation.
pub trait RosterStore: Send + Sync {
    /// Returns the active employees of a station.
    fn list_active_employees(&self, station: &str) -> EngineResult<Vec<Employee>>;

    /// Returns one employee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmployeeNotFound`] for an unknown id.
    fn employee(&self, employee_id: &str) -> EngineResult<Employee>;

    /// Returns an employee's shift history since the given time, sorted
    /// ascending by commencement timestamp.
    fn shift_history(
        &self,
        employee_id: &str,
        since: NaiveDateTime,
    ) -> EngineResult<Vec<ShiftRecord>>;

    /// Creates a new draft roster period.
    fn create_roster_period(
        &self,
        station: &str,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> EngineResult<RosterPeriod>;

    /// Returns one roster period.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RosterPeriodNotFound`] for an unknown id.
    fn roster_period(&self, roster_period_id: &str) -> EngineResult<RosterPeriod>;

    /// Updates a roster period's status.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RosterPeriodNotFound`] for an unknown id.
    fn update_roster_status(
        &self,
        roster_period_id: &str,
        status: RosterStatus,
    ) -> EngineResult<()>;

    /// Inserts a batch of assignments.
    fn bulk_insert_assignments(&self, assignments: &[ShiftAssignment]) -> EngineResult<()>;

    /// Returns every assignment of a roster period.
    fn assignments_for_period(
        &self,
        roster_period_id: &str,
    ) -> EngineResult<Vec<ShiftAssignment>>;
}

#[derive(Debug, Default)]
struct StoreInner {
    employees: Vec<Employee>,
    shifts: Vec<ShiftRecord>,
    periods: HashMap<String, RosterPeriod>,
    assignments: Vec<ShiftAssignment>,
}

/// In-memory [`RosterStore`] implementation.
///
/// Backed by an `RwLock`; suitable for tests and single-process embedding.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee.
    pub fn insert_employee(&self, employee: Employee) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.employees.push(employee);
    }

    /// Adds a historical shift record.
    pub fn insert_shift(&self, shift: ShiftRecord) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.shifts.push(shift);
    }

    /// Adds a roster period directly, bypassing `create_roster_period`.
    pub fn insert_roster_period(&self, period: RosterPeriod) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.periods.insert(period.id.clone(), period);
    }
}

impl RosterStore for InMemoryStore {
    fn list_active_employees(&self, station: &str) -> EngineResult<Vec<Employee>> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner
            .employees
            .iter()
            .filter(|e| e.active && e.station == station)
            .cloned()
            .collect())
    }

    fn employee(&self, employee_id: &str) -> EngineResult<Employee> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .employees
            .iter()
            .find(|e| e.id == employee_id)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })
    }

    fn shift_history(
        &self,
        employee_id: &str,
        since: NaiveDateTime,
    ) -> EngineResult<Vec<ShiftRecord>> {
        let inner = self.inner.read().expect("store lock poisoned");
        let mut history: Vec<ShiftRecord> = inner
            .shifts
            .iter()
            .filter(|s| s.employee_id == employee_id && s.date >= since)
            .cloned()
            .collect();
        history.sort_by_key(|s| s.date);
        Ok(history)
    }

    fn create_roster_period(
        &self,
        station: &str,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> EngineResult<RosterPeriod> {
        let period = RosterPeriod {
            id: Uuid::new_v4().to_string(),
            station: station.to_string(),
            start_date,
            end_date,
            status: RosterStatus::Draft,
        };
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.periods.insert(period.id.clone(), period.clone());
        Ok(period)
    }

    fn roster_period(&self, roster_period_id: &str) -> EngineResult<RosterPeriod> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .periods
            .get(roster_period_id)
            .cloned()
            .ok_or_else(|| EngineError::RosterPeriodNotFound {
                id: roster_period_id.to_string(),
            })
    }

    fn update_roster_status(
        &self,
        roster_period_id: &str,
        status: RosterStatus,
    ) -> EngineResult<()> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let period = inner.periods.get_mut(roster_period_id).ok_or_else(|| {
            EngineError::RosterPeriodNotFound {
                id: roster_period_id.to_string(),
            }
        })?;
        period.status = status;
        Ok(())
    }

    fn bulk_insert_assignments(&self, assignments: &[ShiftAssignment]) -> EngineResult<()> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.assignments.extend_from_slice(assignments);
        Ok(())
    }

    fn assignments_for_period(
        &self,
        roster_period_id: &str,
    ) -> EngineResult<Vec<ShiftAssignment>> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner
            .assignments
            .iter()
            .filter(|a| a.roster_period_id == roster_period_id)
            .cloned()
            .collect())
    }
}
