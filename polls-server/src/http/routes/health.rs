//! Liveness endpoint for the load balancer
//!
//! Never touches the database: a slow or unreachable database must not take
//! the instance out of rotation.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String, example = "ok")]
    pub status: &'static str,
}

/// GET /health
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
    }
}
