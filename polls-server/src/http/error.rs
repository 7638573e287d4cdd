//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes:
//!
//! ```json
//! { "error": "not_found", "detail": "Poll with id 7 not found" }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::DbError;
use crate::models::ValidationError;

/// JSON body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// `validation_error`, `not_found` or `internal_error`
    pub error: String,
    pub detail: String,
    /// Offending field, for validation errors that have one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorBody {
    fn new(error: &str, detail: impl Into<String>) -> Self {
        Self {
            error: error.to_owned(),
            detail: detail.into(),
            field: None,
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (422)
    Validation(ValidationError),

    /// Resource not found (404); `id` is echoed as requested
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    field: e.field().map(str::to_owned),
                    ..ErrorBody::new("validation_error", e.to_string())
                },
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("not_found", format!("{} with id {} not found", resource, id)),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("internal_error", "an internal error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound {
                resource,
                id: id.to_string(),
            },
            _ => Self::Database(e),
        }
    }
}
