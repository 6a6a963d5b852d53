//! Rest-day entitlement rules.
//!
//! Employees are entitled to at least four rest days in every fortnight and
//! to regular blocks of two or more consecutive rest days over the year.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::models::ShiftRecord;

use super::RuleFindings;

/// Minimum rest days required in each 14-day block.
pub const MIN_REST_DAYS_PER_FORTNIGHT: u32 = 4;

/// Consecutive-rest-day blocks an employee is entitled to per year.
const CONSECUTIVE_REST_BLOCKS_PER_YEAR: f64 = 15.0;

/// Checks rest-day entitlements over a sorted shift history.
///
/// The observed span is partitioned into sequential non-overlapping 14-day
/// blocks starting at the first shift date; each block with fewer than four
/// rest days (counting only days inside the span) is a violation. Across the
/// whole span, runs of two or more consecutive rest days are counted and
/// compared against a pro-rata share of the yearly entitlement; falling
/// short over a span longer than four weeks is a warning.
///
/// # Arguments
///
/// * `shifts` - The employee's shift history, sorted ascending by date
pub fn check_rest_days(shifts: &[ShiftRecord]) -> RuleFindings {
    let mut findings = RuleFindings::default();

    let (Some(first), Some(last)) = (shifts.first(), shifts.last()) else {
        return findings;
    };
    let first_day = first.date.date();
    let last_day = last.date.date();

    let worked_days: HashSet<NaiveDate> = shifts.iter().map(|s| s.date.date()).collect();

    // Fortnight blocks anchored at the first shift date.
    let mut block_start = first_day;
    while block_start <= last_day {
        let mut rest_days = 0u32;
        for offset in 0..14 {
            let day = block_start + Duration::days(offset);
            if !worked_days.contains(&day) && day <= last_day {
                rest_days += 1;
            }
        }

        if rest_days < MIN_REST_DAYS_PER_FORTNIGHT {
            findings.violations.push(format!(
                "Only {} rest days in fortnight starting {} (minimum: 4)",
                rest_days,
                block_start.format("%Y-%m-%d")
            ));
        }

        block_start += Duration::days(14);
    }

    // Runs of two or more consecutive rest days across the whole span.
    let mut observed_blocks = 0u32;
    let mut run_length = 0u32;
    let mut day = first_day;
    while day <= last_day {
        if worked_days.contains(&day) {
            if run_length >= 2 {
                observed_blocks += 1;
            }
            run_length = 0;
        } else {
            run_length += 1;
        }
        day += Duration::days(1);
    }
    if run_length >= 2 {
        observed_blocks += 1;
    }

    let span_weeks = (last_day - first_day).num_days() as f64 / 7.0;
    let expected_blocks = ((span_weeks / 52.0) * CONSECUTIVE_REST_BLOCKS_PER_YEAR).round() as u32;

    if observed_blocks < expected_blocks && span_weeks > 4.0 {
        findings.warnings.push(format!(
            "Only {} periods of 2+ consecutive rest days (expected ~{} for this period)",
            observed_blocks, expected_blocks
        ));
    }

    findings
}
