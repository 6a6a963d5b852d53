//! Shift model and related types.
//!
//! This module defines the closed [`ShiftType`] set and the [`ShiftRecord`]
//! struct representing historical shifts in the rostering system.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The standard length of a rostered shift in hours.
///
/// Every shift contributes `8 + overtime_hours` to hour accounting windows.
pub const BASE_SHIFT_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The closed set of rosterable shift types.
///
/// Every dispatch on shift type (coverage lookup, fixed times, night
/// detection) matches exhaustively so adding a variant is a compile error
/// until each dispatch point handles it.
///
/// # Example
///
/// ```
/// use roster_engine::models::ShiftType;
///
/// assert_eq!(ShiftType::Night.start_time(), "22:00");
/// assert!(ShiftType::Night.is_night());
/// assert!(!ShiftType::Corro.is_night());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Early general-duties shift, 06:00-14:00.
    Early,
    /// Late general-duties shift, 14:00-22:00.
    Late,
    /// Night shift, 22:00-06:00.
    Night,
    /// Divisional van crew shift, 06:00-14:00.
    Van,
    /// Watchhouse duty shift, 06:00-14:00.
    Watchhouse,
    /// Correspondence/administrative duty shift, 09:00-17:00, weekdays only.
    Corro,
}

impl ShiftType {
    /// All shift types, in the order the allocator evaluates them.
    pub const ALL: [ShiftType; 6] = [
        ShiftType::Early,
        ShiftType::Late,
        ShiftType::Night,
        ShiftType::Van,
        ShiftType::Watchhouse,
        ShiftType::Corro,
    ];

    /// Returns the fixed start time-of-day for this shift type.
    pub fn start_time(&self) -> &'static str {
        match self {
            ShiftType::Early => "06:00",
            ShiftType::Late => "14:00",
            ShiftType::Night => "22:00",
            ShiftType::Van => "06:00",
            ShiftType::Watchhouse => "06:00",
            ShiftType::Corro => "09:00",
        }
    }

    /// Returns the fixed end time-of-day for this shift type.
    pub fn end_time(&self) -> &'static str {
        match self {
            ShiftType::Early => "14:00",
            ShiftType::Late => "22:00",
            ShiftType::Night => "06:00",
            ShiftType::Van => "14:00",
            ShiftType::Watchhouse => "14:00",
            ShiftType::Corro => "17:00",
        }
    }

    /// Returns the fixed rostered length of this shift type in hours.
    pub fn hours(&self) -> Decimal {
        match self {
            ShiftType::Early
            | ShiftType::Late
            | ShiftType::Night
            | ShiftType::Van
            | ShiftType::Watchhouse
            | ShiftType::Corro => BASE_SHIFT_HOURS,
        }
    }

    /// Returns true for the night shift type.
    pub fn is_night(&self) -> bool {
        match self {
            ShiftType::Night => true,
            ShiftType::Early
            | ShiftType::Late
            | ShiftType::Van
            | ShiftType::Watchhouse
            | ShiftType::Corro => false,
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShiftType::Early => "early",
            ShiftType::Late => "late",
            ShiftType::Night => "night",
            ShiftType::Van => "van",
            ShiftType::Watchhouse => "watchhouse",
            ShiftType::Corro => "corro",
        };
        write!(f, "{}", name)
    }
}

/// A historical shift worked by an employee.
///
/// Shift records are append-only facts; the compliance evaluator consumes
/// them sorted ascending by commencement timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee who worked the shift.
    pub employee_id: String,
    /// The type of shift worked.
    pub shift_type: ShiftType,
    /// The commencement timestamp of the shift. Break and recovery rules
    /// measure hour gaps between these timestamps.
    pub date: NaiveDateTime,
    /// The start time-of-day (e.g., "06:00").
    pub start_time: String,
    /// The end time-of-day (e.g., "14:00").
    pub end_time: String,
    /// Overtime hours worked on top of the standard shift length.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Whether the employee was recalled to duty for this shift.
    #[serde(default)]
    pub was_recalled: bool,
    /// Free-text notes, if any.
    #[serde(default)]
    pub notes: Option<String>,
}

impl ShiftRecord {
    /// Returns the hours this shift contributes to any accounting window.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::{ShiftRecord, ShiftType};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftRecord {
    ///     id: "shift_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     shift_type: ShiftType::Early,
    ///     date: NaiveDateTime::parse_from_str("2026-03-02 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     start_time: "06:00".to_string(),
    ///     end_time: "14:00".to_string(),
    ///     overtime_hours: Decimal::new(15, 1), // 1.5
    ///     was_recalled: false,
    ///     notes: None,
    /// };
    /// assert_eq!(shift.accountable_hours(), Decimal::new(95, 1)); // 9.5
    /// ```
    pub fn accountable_hours(&self) -> Decimal {
        BASE_SHIFT_HOURS + self.overtime_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_shift(shift_type: ShiftType, date: &str) -> ShiftRecord {
        ShiftRecord {
            id: "shift_001".to_string(),
            employee_id: "emp_001".to_string(),
            shift_type,
            date: make_datetime(date),
            start_time: shift_type.start_time().to_string(),
            end_time: shift_type.end_time().to_string(),
            overtime_hours: Decimal::ZERO,
            was_recalled: false,
            notes: None,
        }
    }

    #[test]
    fn test_fixed_times_per_shift_type() {
        assert_eq!(ShiftType::Early.start_time(), "06:00");
        assert_eq!(ShiftType::Early.end_time(), "14:00");
        assert_eq!(ShiftType::Late.start_time(), "14:00");
        assert_eq!(ShiftType::Late.end_time(), "22:00");
        assert_eq!(ShiftType::Night.start_time(), "22:00");
        assert_eq!(ShiftType::Night.end_time(), "06:00");
        assert_eq!(ShiftType::Van.start_time(), "06:00");
        assert_eq!(ShiftType::Watchhouse.start_time(), "06:00");
        assert_eq!(ShiftType::Corro.start_time(), "09:00");
        assert_eq!(ShiftType::Corro.end_time(), "17:00");
    }

    #[test]
    fn test_all_shift_types_are_8_hours() {
        for shift_type in ShiftType::ALL {
            assert_eq!(shift_type.hours(), BASE_SHIFT_HOURS);
        }
    }

    #[test]
    fn test_only_night_is_night() {
        for shift_type in ShiftType::ALL {
            assert_eq!(shift_type.is_night(), shift_type == ShiftType::Night);
        }
    }

    #[test]
    fn test_accountable_hours_without_overtime() {
        let shift = make_shift(ShiftType::Early, "2026-03-02 06:00:00");
        assert_eq!(shift.accountable_hours(), Decimal::new(80, 1)); // 8.0
    }

    #[test]
    fn test_accountable_hours_with_overtime() {
        let mut shift = make_shift(ShiftType::Late, "2026-03-02 14:00:00");
        shift.overtime_hours = Decimal::new(25, 1); // 2.5
        assert_eq!(shift.accountable_hours(), Decimal::new(105, 1)); // 10.5
    }

    #[test]
    fn test_shift_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftType::Watchhouse).unwrap(),
            "\"watchhouse\""
        );
        let parsed: ShiftType = serde_json::from_str("\"corro\"").unwrap();
        assert_eq!(parsed, ShiftType::Corro);
    }

    #[test]
    fn test_shift_type_display() {
        assert_eq!(format!("{}", ShiftType::Night), "night");
        assert_eq!(format!("{}", ShiftType::Van), "van");
    }

    #[test]
    fn test_shift_record_deserialization_defaults() {
        let json = r#"{
            "id": "shift_002",
            "employee_id": "emp_001",
            "shift_type": "night",
            "date": "2026-03-02T22:00:00",
            "start_time": "22:00",
            "end_time": "06:00"
        }"#;

        let shift: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shift.shift_type, ShiftType::Night);
        assert_eq!(shift.overtime_hours, Decimal::ZERO);
        assert!(!shift.was_recalled);
        assert!(shift.notes.is_none());
    }

    #[test]
    fn test_shift_record_round_trip() {
        let shift = make_shift(ShiftType::Van, "2026-03-03 06:00:00");
        let json = serde_json::to_string(&shift).unwrap();
        let deserialized: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }
}
