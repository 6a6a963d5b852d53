//! Employee model and related types.
//!
//! This module defines the Employee struct and ShiftPreferences record
//! for representing shift workers in the rostering system.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Rostering preferences for an employee.
///
/// Preferences influence candidate ranking during allocation; they are never
/// hard constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPreferences {
    /// Maximum night shifts the employee is comfortable with per month.
    /// Zero means night shifts should be strongly avoided.
    #[serde(default = "default_night_tolerance")]
    pub night_shift_tolerance: i32,
    /// Whether the employee is willing to be recalled out of hours.
    #[serde(default = "default_true")]
    pub recall_willingness: bool,
    /// Avoid rostering back-to-back double shifts.
    #[serde(default = "default_true")]
    pub avoid_consecutive_doubles: bool,
    /// Avoid rostering four early shifts in a row.
    #[serde(default = "default_true")]
    pub avoid_four_earlies: bool,
    /// Weekdays the employee prefers to keep as rest days.
    #[serde(default)]
    pub preferred_rest_days: Vec<Weekday>,
    /// Free-text medical limitations, if any.
    #[serde(default)]
    pub medical_limitations: Option<String>,
    /// Free-text welfare notes, if any.
    #[serde(default)]
    pub welfare_notes: Option<String>,
}

fn default_night_tolerance() -> i32 {
    2
}

fn default_true() -> bool {
    true
}

impl Default for ShiftPreferences {
    fn default() -> Self {
        Self {
            night_shift_tolerance: default_night_tolerance(),
            recall_willingness: true,
            avoid_consecutive_doubles: true,
            avoid_four_earlies: true,
            preferred_rest_days: Vec::new(),
            medical_limitations: None,
            welfare_notes: None,
        }
    }
}

impl ShiftPreferences {
    /// Returns true if the given weekday is one of the employee's preferred
    /// rest days.
    pub fn prefers_rest_on(&self, weekday: Weekday) -> bool {
        self.preferred_rest_days.contains(&weekday)
    }
}

/// Represents an employee eligible for rostering.
///
/// An `Employee` is an immutable snapshot during one allocation run:
/// preference or roster edits made mid-run are not observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's service number (e.g., "VP12347").
    pub service_number: String,
    /// The employee's display name.
    pub name: String,
    /// The station the employee belongs to (e.g., "geelong").
    pub station: String,
    /// The employee's rank (e.g., "Constable").
    #[serde(default = "default_rank")]
    pub rank: String,
    /// Years of seniority.
    #[serde(default)]
    pub seniority_years: u32,
    /// Rostering preferences.
    #[serde(default)]
    pub preferences: ShiftPreferences,
    /// Whether the employee is active and available for rostering.
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_rank() -> String {
    "Constable".to_string()
}
