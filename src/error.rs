//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during roster generation,
//! compliance evaluation, and publication.

use thiserror::Error;

use crate::models::RosterStatus;

/// The main error type for the roster engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::RosterPeriodNotFound {
///     id: "rp_missing".to_string(),
/// };
/// assert_eq!(error.to_string(), "Roster period not found: rp_missing");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A roster generation config field was invalid.
    #[error("Invalid roster config field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A roster could not be published because the validator reported
    /// violations.
    #[error("Cannot publish roster {roster_period_id} with compliance violations: {}", violations.join("; "))]
    ComplianceViolation {
        /// The roster period that failed the publication gate.
        roster_period_id: String,
        /// The violations reported by the roster validator.
        violations: Vec<String>,
    },

    /// The requested roster period does not exist.
    #[error("Roster period not found: {id}")]
    RosterPeriodNotFound {
        /// The roster period id that was not found.
        id: String,
    },

    /// The requested employee does not exist.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// A roster period status transition that the state machine forbids.
    #[error("Invalid roster status transition: {from} -> {to}")]
    InvalidStatusTransition {
        /// The current status.
        from: RosterStatus,
        /// The requested status.
        to: RosterStatus,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
