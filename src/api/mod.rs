//! HTTP API module for the roster engine.
//!
//! This module provides the REST endpoints for generating, inspecting, and
//! publishing rosters and for evaluating employee compliance.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ConfigOverrides, EvaluateComplianceRequest, GenerateRosterRequest, ShiftRecordRequest,
    ValidateRosterRequest,
};
pub use response::ApiError;
pub use state::AppState;
