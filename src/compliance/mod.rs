//! Working-hours compliance rules.
//!
//! This module contains one submodule per statutory rule: the sliding
//! 76-hour fortnight limit, the 10-hour rest break between shifts,
//! night-shift recovery, rest-day entitlements, the 60-hour week cap, and
//! roster publication notice. The [`evaluate`] entry point runs every rule
//! over one employee's shift history and aggregates the findings into a
//! [`crate::models::ComplianceReport`].

mod breaks;
mod evaluator;
mod fortnight;
mod nights;
mod notice;
mod rest_days;
mod weekly_hours;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

pub use breaks::{check_rest_breaks, MIN_REST_BREAK_HOURS};
pub use evaluator::{evaluate, APPROACH_WARNING_HOURS, URGENT_WARNING_HOURS};
pub use fortnight::{check_fortnight_hours, FORTNIGHT_HOUR_LIMIT};
pub use nights::{check_night_recovery, NIGHT_RECOVERY_HOURS};
pub use notice::{classify_publication_notice, PublicationNotice};
pub use rest_days::{check_rest_days, MIN_REST_DAYS_PER_FORTNIGHT};
pub use weekly_hours::{check_weekly_hours, WEEKLY_HOUR_LIMIT};

/// Violation and warning messages produced by a single rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleFindings {
    /// Rule violations, in discovery order.
    pub violations: Vec<String>,
    /// Rule warnings, in discovery order.
    pub warnings: Vec<String>,
}

/// Returns the number of hours between two timestamps as a decimal.
pub(crate) fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let minutes = (end - start).num_minutes();
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}
