//! Request types for the roster engine API.
//!
//! This module defines the JSON request structures for the roster and
//! compliance endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{ConfigLoader, RosterGenerationConfig};
use crate::models::{ShiftAssignment, ShiftRecord, ShiftType};

/// Request body for `POST /roster/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRosterRequest {
    /// The station to roster.
    pub station: String,
    /// The first day of the roster period.
    pub period_start: NaiveDate,
    /// Optional overrides on top of the station's configured defaults.
    #[serde(default)]
    pub config: Option<ConfigOverrides>,
}

/// Partial generation-config overrides supplied per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigOverrides {
    /// Period length override in weeks.
    #[serde(default)]
    pub period_weeks: Option<i32>,
    /// Van coverage override.
    #[serde(default)]
    pub min_van_coverage: Option<i32>,
    /// Watchhouse coverage override.
    #[serde(default)]
    pub min_watchhouse_coverage: Option<i32>,
    /// Consecutive-night cap override.
    #[serde(default)]
    pub max_consecutive_nights: Option<i32>,
    /// Rest-day target override.
    #[serde(default)]
    pub min_rest_days_per_fortnight: Option<i32>,
    /// Fortnight hour cap override.
    #[serde(default)]
    pub max_fortnight_hours: Option<Decimal>,
    /// Compatibility flag override; no effect on allocation.
    #[serde(default)]
    pub enable_fatigue_balancing: Option<bool>,
    /// Compatibility flag override; no effect on allocation.
    #[serde(default)]
    pub enable_preference_weighting: Option<bool>,
    /// Compatibility flag override; no effect on allocation.
    #[serde(default)]
    pub corro_rotation_priority: Option<bool>,
}

impl GenerateRosterRequest {
    /// Builds the effective generation config: station profile defaults
    /// (when the station has one), then per-request overrides.
    pub fn resolve_config(&self, loader: &ConfigLoader) -> RosterGenerationConfig {
        let mut config = loader
            .station_defaults(&self.station)
            .unwrap_or_else(|| RosterGenerationConfig::for_station(&self.station));

        if let Some(overrides) = &self.config {
            if let Some(value) = overrides.period_weeks {
                config.period_weeks = value;
            }
            if let Some(value) = overrides.min_van_coverage {
                config.min_van_coverage = value;
            }
            if let Some(value) = overrides.min_watchhouse_coverage {
                config.min_watchhouse_coverage = value;
            }
            if let Some(value) = overrides.max_consecutive_nights {
                config.max_consecutive_nights = value;
            }
            if let Some(value) = overrides.min_rest_days_per_fortnight {
                config.min_rest_days_per_fortnight = value;
            }
            if let Some(value) = overrides.max_fortnight_hours {
                config.max_fortnight_hours = value;
            }
            if let Some(value) = overrides.enable_fatigue_balancing {
                config.enable_fatigue_balancing = value;
            }
            if let Some(value) = overrides.enable_preference_weighting {
                config.enable_preference_weighting = value;
            }
            if let Some(value) = overrides.corro_rotation_priority {
                config.corro_rotation_priority = value;
            }
        }

        config
    }
}

/// Request body for `POST /compliance/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateComplianceRequest {
    /// The employee the history belongs to.
    pub employee_id: String,
    /// The shift history to evaluate.
    pub shifts: Vec<ShiftRecordRequest>,
    /// The reference time for trailing-fortnight accounting.
    pub now: NaiveDateTime,
}

/// Shift information in an inline compliance evaluation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRecordRequest {
    /// Optional shift id; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// The type of shift worked.
    pub shift_type: ShiftType,
    /// The commencement timestamp of the shift.
    pub date: NaiveDateTime,
    /// Start time-of-day; defaults to the shift type's fixed start.
    #[serde(default)]
    pub start_time: Option<String>,
    /// End time-of-day; defaults to the shift type's fixed end.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Overtime hours on top of the standard shift length.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Whether the employee was recalled to duty.
    #[serde(default)]
    pub was_recalled: bool,
}

impl ShiftRecordRequest {
    /// Converts the request shift into a domain [`ShiftRecord`] for the
    /// given employee.
    pub fn into_record(self, employee_id: &str) -> ShiftRecord {
        let shift_type = self.shift_type;
        ShiftRecord {
            id: self
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            employee_id: employee_id.to_string(),
            shift_type,
            date: self.date,
            start_time: self
                .start_time
                .unwrap_or_else(|| shift_type.start_time().to_string()),
            end_time: self
                .end_time
                .unwrap_or_else(|| shift_type.end_time().to_string()),
            overtime_hours: self.overtime_hours,
            was_recalled: self.was_recalled,
            notes: None,
        }
    }
}

/// Request body for `POST /roster/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRosterRequest {
    /// The assignments to audit.
    pub assignments: Vec<ShiftAssignment>,
}
