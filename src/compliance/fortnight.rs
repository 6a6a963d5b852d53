//! Sliding 76-hour fortnight rule.
//!
//! No employee may work more than 76 hours in any 14-day window. The window
//! slides with every shift rather than aligning to calendar fortnights, so a
//! burst of shifts spanning a fortnight boundary is still caught.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::models::ShiftRecord;

/// Maximum hours permitted in any 14-day window.
pub const FORTNIGHT_HOUR_LIMIT: Decimal = Decimal::from_parts(76, 0, 0, false, 0);

/// Length of the sliding window in days.
const FORTNIGHT_DAYS: i64 = 14;

/// Checks the sliding fortnight hour limit over a sorted shift history.
///
/// For every shift, the accountable hours of all shifts commencing in
/// `[shift, shift + 14 days)` are summed; any window exceeding the limit
/// produces a violation naming the total and the window start.
///
/// # Arguments
///
/// * `shifts` - The employee's shift history, sorted ascending by date
///
/// # Example
///
/// ```
/// use roster_engine::compliance::check_fortnight_hours;
///
/// let violations = check_fortnight_hours(&[]);
/// assert!(violations.is_empty());
/// ```
pub fn check_fortnight_hours(shifts: &[ShiftRecord]) -> Vec<String> {
    let mut violations = Vec::new();

    for shift in shifts {
        let window_start = shift.date;
        let window_end = window_start + Duration::days(FORTNIGHT_DAYS);

        let total: Decimal = shifts
            .iter()
            .filter(|s| s.date >= window_start && s.date < window_end)
            .map(|s| s.accountable_hours())
            .sum();

        if total > FORTNIGHT_HOUR_LIMIT {
            violations.push(format!(
                "Exceeded 76h limit: {:.1}h in fortnight starting {}",
                total,
                window_start.format("%Y-%m-%d")
            ));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::models::ShiftType;

    fn make_shift(date: &str, overtime: Decimal) -> ShiftRecord {
        ShiftRecord {
            id: format!("shift_{}", date),
            employee_id: "emp_001".to_string(),
            shift_type: ShiftType::Early,
            date: NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").unwrap(),
            start_time: "06:00".to_string(),
            end_time: "14:00".to_string(),
            overtime_hours: overtime,
            was_recalled: false,
            notes: None,
        }
    }

    fn daily_shifts(start_day: u32, count: u32) -> Vec<ShiftRecord> {
        (0..count)
            .map(|i| {
                make_shift(
                    &format!("2026-03-{:02} 06:00:00", start_day + i),
                    Decimal::ZERO,
                )
            })
            .collect()
    }

    // ==========================================================================
    // FH-001: nine 8-hour shifts in a fortnight - 72h, no violation
    // ==========================================================================
    #[test]
    fn test_fh_001_72_hours_no_violation() {
        let shifts = daily_shifts(2, 9);
        assert!(check_fortnight_hours(&shifts).is_empty());
    }

    // ==========================================================================
    // FH-002: ten 8-hour shifts in a fortnight - 80h, violation names total
    // ==========================================================================
    #[test]
    fn test_fh_002_80_hours_violation() {
        let shifts = daily_shifts(2, 10);
        let violations = check_fortnight_hours(&shifts);
        assert!(!violations.is_empty());
        assert!(violations[0].contains("80.0h"));
        assert!(violations[0].contains("2026-03-02"));
    }

    // ==========================================================================
    // FH-003: exactly 76h is allowed (limit is exclusive)
    // ==========================================================================
    #[test]
    fn test_fh_003_exactly_76_hours_allowed() {
        // Nine shifts of 8h plus 4h overtime on the last = 76h.
        let mut shifts = daily_shifts(2, 9);
        shifts[8].overtime_hours = Decimal::new(4, 0);
        assert!(check_fortnight_hours(&shifts).is_empty());
    }

    // ==========================================================================
    // FH-004: overtime hours count toward the window total
    // ==========================================================================
    #[test]
    fn test_fh_004_overtime_counts() {
        // Nine shifts of 8h plus 4.5h overtime on one = 76.5h.
        let mut shifts = daily_shifts(2, 9);
        shifts[4].overtime_hours = Decimal::new(45, 1);
        let violations = check_fortnight_hours(&shifts);
        assert!(!violations.is_empty());
        assert!(violations[0].contains("76.5h"));
    }

    // ==========================================================================
    // FH-005: window is sliding, not calendar-aligned
    // ==========================================================================
    #[test]
    fn test_fh_005_sliding_window_catches_straddling_burst() {
        // 5 shifts at the end of one fortnight and 5 at the start of the
        // next: each calendar fortnight holds only 40h, but the 10 shifts
        // all fall within a single sliding window.
        let mut shifts = daily_shifts(10, 10);
        for shift in &mut shifts {
            shift.overtime_hours = Decimal::ONE; // 9h each, 90h total
        }
        let violations = check_fortnight_hours(&shifts);
        assert!(!violations.is_empty());
        assert!(violations[0].contains("90.0h"));
    }

    // ==========================================================================
    // FH-006: a shift 14 days after the window start is excluded
    // ==========================================================================
    #[test]
    fn test_fh_006_window_end_exclusive() {
        let mut shifts = daily_shifts(2, 9); // 72h in window of first shift
        // A tenth shift exactly 14 days after the first starts a new window.
        shifts.push(make_shift("2026-03-16 06:00:00", Decimal::ZERO));
        assert!(check_fortnight_hours(&shifts).is_empty());
    }

    #[test]
    fn test_empty_history_no_violations() {
        assert!(check_fortnight_hours(&[]).is_empty());
    }
}
