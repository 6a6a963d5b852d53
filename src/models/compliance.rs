//! Compliance reporting models.
//!
//! This module contains the [`ComplianceReport`] produced by the rule
//! evaluator and the [`ComplianceSummary`] produced by the roster validator.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overall compliance classification.
///
/// The worst category present in an evaluation wins: any violation makes the
/// status `Violation`, otherwise any warning makes it `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// No violations or warnings.
    Compliant,
    /// At least one warning, no violations.
    Warning,
    /// At least one violation.
    Violation,
}

impl ComplianceStatus {
    /// Classifies a set of message lists into the worst present category.
    pub fn from_messages(violations: &[String], warnings: &[String]) -> Self {
        if !violations.is_empty() {
            ComplianceStatus::Violation
        } else if !warnings.is_empty() {
            ComplianceStatus::Warning
        } else {
            ComplianceStatus::Compliant
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Warning => "warning",
            ComplianceStatus::Violation => "violation",
        };
        write!(f, "{}", name)
    }
}

/// The result of evaluating one employee's shift history against the
/// working-hours rules.
///
/// Reports are derived on demand from shift history and a reference time;
/// they are never stored as a system of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// The employee the report is about.
    pub employee_id: String,
    /// Hours worked in the trailing 14 calendar days from the reference
    /// time.
    pub fortnight_hours: Decimal,
    /// The current consecutive-night count, or, when zero, how many of the
    /// last five shifts carried overtime.
    pub consecutive_shifts_without_break: usize,
    /// Overall classification.
    pub compliance_status: ComplianceStatus,
    /// Ordered violation messages.
    pub violations: Vec<String>,
    /// Ordered warning messages.
    pub warnings: Vec<String>,
    /// The reference time the report was evaluated against.
    pub last_check: NaiveDateTime,
}

/// Aggregate result of auditing a generated roster's assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    /// True when any violation was found.
    pub has_violations: bool,
    /// True when any warning was found.
    pub has_warnings: bool,
    /// All violation messages, grouped per employee in check order.
    pub violations: Vec<String>,
    /// All warning messages, grouped per employee in check order.
    pub warnings: Vec<String>,
    /// How many employees had assignments in the audited roster.
    pub employees_checked: usize,
}
