//! Root greeting

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str = "Welcome to the Polls API";

#[derive(Serialize, ToSchema)]
pub struct WelcomeResponse {
    #[schema(value_type = String)]
    pub message: &'static str,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message", body = WelcomeResponse)),
    tag = "health"
)]
pub async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
