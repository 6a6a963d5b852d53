//! Roster publication notice rule.
//!
//! Rosters must be published at least four weeks before the period starts.
//! Three weeks counts as a warning; anything shorter is a violation.

use chrono::NaiveDateTime;

use crate::models::ComplianceStatus;

/// Days of notice required for a compliant publication.
const COMPLIANT_NOTICE_DAYS: i64 = 28;

/// Days of notice below which publication is a warning rather than
/// compliant.
const WARNING_NOTICE_DAYS: i64 = 21;

/// The classification of one roster publication's advance notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationNotice {
    /// Whole days between publication and the period start.
    pub days_in_advance: i64,
    /// The resulting classification.
    pub status: ComplianceStatus,
}

/// Classifies how much notice a roster publication gives.
///
/// # Example
///
/// ```
/// use roster_engine::compliance::classify_publication_notice;
/// use roster_engine::models::ComplianceStatus;
/// use chrono::NaiveDateTime;
///
/// let published = NaiveDateTime::parse_from_str("2026-02-02 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let starts = NaiveDateTime::parse_from_str("2026-03-02 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let notice = classify_publication_notice(published, starts);
/// assert_eq!(notice.status, ComplianceStatus::Compliant);
/// ```
pub fn classify_publication_notice(
    publication_date: NaiveDateTime,
    period_start: NaiveDateTime,
) -> PublicationNotice {
    let days_in_advance = (period_start - publication_date).num_days();

    let status = if days_in_advance >= COMPLIANT_NOTICE_DAYS {
        ComplianceStatus::Compliant
    } else if days_in_advance >= WARNING_NOTICE_DAYS {
        ComplianceStatus::Warning
    } else {
        ComplianceStatus::Violation
    };

    PublicationNotice {
        days_in_advance,
        status,
    }
}
