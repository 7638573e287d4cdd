//! Custom Axum extractors
//!
//! Both turn axum's own rejections into [`ApiError::Validation`], so every
//! malformed request gets the same 422 body before any database work.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body extractor with validation-style rejections
///
/// Missing fields, wrong types, broken JSON and a missing
/// `Content-Type: application/json` all map to a validation error; the
/// message from serde names the failing path (e.g. `options[0]`).
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "rejected request body");
                Err(ApiError::Validation(ValidationError::Malformed {
                    reason: rejection.body_text(),
                }))
            }
        }
    }
}

/// Integer id from a single-parameter path like `/polls/{poll_id}`
///
/// A non-integer segment is reported against the parameter's name. An
/// integer outside the key column's range is kept as text so it can still
/// be answered with a not-found naming the requested id.
#[derive(Debug)]
pub struct PathId {
    raw: String,
}

impl PathId {
    /// Narrow to a `SERIAL` key; no row can carry an id outside its range.
    pub fn key(&self, resource: &'static str) -> Result<i32, ApiError> {
        self.raw.parse::<i32>().map_err(|_| ApiError::NotFound {
            resource,
            id: self.raw.clone(),
        })
    }
}

fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params): Path<Vec<(String, String)>> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ApiError::Validation(ValidationError::Malformed {
                    reason: e.body_text(),
                })
            })?;

        let Some((field, value)) = params.into_iter().next() else {
            return Err(ApiError::Validation(ValidationError::Malformed {
                reason: "missing path parameter".to_owned(),
            }));
        };

        if !is_integer(&value) {
            return Err(ApiError::Validation(ValidationError::NotAnInteger { field, value }));
        }

        Ok(Self { raw: value })
    }
}
