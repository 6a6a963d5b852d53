//! HTTP request handlers for the roster engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::compliance;
use crate::engine;
use crate::error::EngineError;

use super::request::{EvaluateComplianceRequest, GenerateRosterRequest, ValidateRosterRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/roster/generate", post(generate_roster_handler))
        .route("/roster/:id", get(roster_details_handler))
        .route("/roster/:id/publish", put(publish_roster_handler))
        .route("/roster/validate", post(validate_roster_handler))
        .route("/compliance/evaluate", post(evaluate_compliance_handler))
        .route("/compliance/:employee_id", get(employee_compliance_handler))
        .with_state(state)
}

fn engine_error_response(correlation_id: Uuid, error: EngineError) -> axum::response::Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /roster/generate.
async fn generate_roster_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRosterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster generation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = request.resolve_config(state.config());
    match engine::generate_roster(state.store(), &config, request.period_start) {
        Ok(generation) => {
            info!(
                correlation_id = %correlation_id,
                roster_period_id = %generation.roster_period_id,
                assignments = generation.total_assignments,
                "Roster generation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(generation),
            )
                .into_response()
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for GET /roster/:id.
async fn roster_details_handler(
    State(state): State<AppState>,
    Path(roster_period_id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let period = match state.store().roster_period(&roster_period_id) {
        Ok(period) => period,
        Err(error) => return engine_error_response(correlation_id, error),
    };
    let assignments = match state.store().assignments_for_period(&roster_period_id) {
        Ok(assignments) => assignments,
        Err(error) => return engine_error_response(correlation_id, error),
    };
    let compliance_summary = engine::validate_assignments(&assignments);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(json!({
            "roster_period": period,
            "total_assignments": assignments.len(),
            "assignments": assignments,
            "compliance_summary": compliance_summary,
        })),
    )
        .into_response()
}

/// Handler for PUT /roster/:id/publish.
async fn publish_roster_handler(
    State(state): State<AppState>,
    Path(roster_period_id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        roster_period_id = %roster_period_id,
        "Processing roster publication request"
    );

    match engine::publish_roster(state.store(), &roster_period_id) {
        Ok(period) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(period),
        )
            .into_response(),
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for POST /roster/validate.
async fn validate_roster_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ValidateRosterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Malformed validation request");
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::malformed_json(rejection.body_text())),
            )
                .into_response();
        }
    };

    let summary = engine::validate_assignments(&request.assignments);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Handler for POST /compliance/evaluate.
///
/// Evaluates an inline shift history with an explicit reference time; no
/// storage lookups are involved, so identical requests give identical
/// responses.
async fn evaluate_compliance_handler(
    State(_state): State<AppState>,
    payload: Result<Json<EvaluateComplianceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Malformed evaluation request");
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::malformed_json(rejection.body_text())),
            )
                .into_response();
        }
    };

    let employee_id = request.employee_id;
    let shifts: Vec<_> = request
        .shifts
        .into_iter()
        .map(|shift| shift.into_record(&employee_id))
        .collect();
    let report = compliance::evaluate(&employee_id, &shifts, request.now);

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        status = %report.compliance_status,
        "Compliance evaluation completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Query parameters for GET /compliance/:employee_id.
#[derive(Debug, Deserialize)]
struct ComplianceQuery {
    /// Reference time override; defaults to the current UTC time.
    now: Option<NaiveDateTime>,
}

/// Handler for GET /compliance/:employee_id.
async fn employee_compliance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Query(query): Query<ComplianceQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let now = query.now.unwrap_or_else(|| Utc::now().naive_utc());

    match engine::evaluate_employee_compliance(state.store(), &employee_id, now) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(report),
        )
            .into_response(),
        Err(error) => engine_error_response(correlation_id, error),
    }
}
