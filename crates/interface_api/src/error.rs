//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::CoreError;
use domain_match::MatchError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, field) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Validation { field, message } => {
                (StatusCode::BAD_REQUEST, "validation_error", message, Some(field))
            }
            ApiError::Database(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg, None)
            }
            ApiError::Unavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "unavailable", msg, None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            field,
        };

        (status, Json(body)).into_response()
    }
}

impl From<MatchError> for ApiError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::Validation { field, message } => ApiError::Validation { field, message },
            MatchError::NotFound(id) => ApiError::NotFound(format!("match {id} not found")),
            store @ MatchError::Store { .. } => {
                error!(error = %store, "Match store failure");
                ApiError::Database(store.to_string())
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::MatchId;

    #[test]
    fn test_match_errors_map_to_statuses() {
        let cases = [
            (MatchError::validation("matchDate", "bad"), StatusCode::BAD_REQUEST),
            (MatchError::NotFound(MatchId::new(9)), StatusCode::NOT_FOUND),
            (
                MatchError::store("failed to increment goals", "connection reset"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = ApiError::from(MatchError::NotFound(MatchId::new(12)));
        assert_eq!(err.to_string(), "Not found: match 12 not found");
    }

    #[test]
    fn test_invalid_id_is_a_bad_request() {
        let err = ApiError::from(CoreError::invalid_id("abc"));
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
