//! OpenAPI document and a browsable page for it
//!
//! - GET /openapi.json: the generated document
//! - GET /docs: Swagger UI reading `/openapi.json`

use axum::{response::Html, routing::get, Json, Router};
use utoipa::OpenApi;

use super::{health, index, polls, votes};
use crate::http::error::ErrorBody;
use crate::http::schemas::{CreateOptionRequest, CreatePollRequest, OptionResponse, PollResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Polls API",
        description = "Backend for creating polls and voting on their options"
    ),
    paths(
        index::index,
        health::health,
        polls::create_poll,
        polls::list_polls,
        polls::get_poll,
        votes::vote_for_option,
    ),
    components(schemas(
        CreatePollRequest,
        CreateOptionRequest,
        PollResponse,
        OptionResponse,
        ErrorBody,
    )),
    tags(
        (name = "polls", description = "Polls and votes"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

const SWAGGER_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Polls API - Swagger UI</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

/// GET /openapi.json
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs
async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_PAGE)
}

/// Documentation routes, served from the root like `/`
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(swagger_ui))
}
