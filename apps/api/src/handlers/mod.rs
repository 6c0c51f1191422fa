//! HTTP handlers for the REST API.
//!
//! Each handler translates path parameters and JSON bodies into repository
//! calls and maps the outcome to a fixed status code. Validation is limited
//! to numeric path parsing and JSON well-formedness; field-level checks are
//! deliberately absent.

pub mod invoice;
pub mod item;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Malformed JSON bodies are a client error, always 400.
/// (axum's default rejection would answer 422 for type mismatches.)
pub(crate) fn bad_payload(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(format!("Invalid request payload: {rejection}"))
}

/// GET /health
///
/// Verifies the service is running and the database answers queries.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = if state.db.health_check().await {
        "connected".to_string()
    } else {
        "disconnected".to_string()
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        database,
    })
}
