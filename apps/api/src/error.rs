//! HTTP error handling.
//!
//! Repository errors surface raw to the handlers; the handlers map them onto
//! a three-bucket taxonomy, and each bucket becomes a fixed status code with
//! a short plain-text message body. No structured error codes beyond the
//! HTTP status itself.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use billing_db::DbError;

/// Application error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed id or request body → 400.
    #[error("{0}")]
    BadRequest(String),

    /// No matching row → 404.
    #[error("{0}")]
    NotFound(String),

    /// Store connectivity, constraint, or transaction failure → 500.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => {
                // The client gets a short message; the detail goes to the log.
                error!(detail = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_not_found_maps_to_404() {
        let err: ApiError = DbError::not_found("Invoice", 7).into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn other_db_errors_map_to_500() {
        let err: ApiError = DbError::QueryFailed("boom".to_string()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
