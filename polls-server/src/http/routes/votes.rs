//! Vote endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::http::error::{ApiError, ErrorBody};
use crate::http::extractors::PathId;
use crate::http::schemas::OptionResponse;
use crate::http::server::AppState;

/// POST /vote/{option_id} - add one vote to an option
#[utoipa::path(
    post,
    path = "/api/vote/{option_id}",
    params(("option_id" = i64, Path, description = "Option id")),
    responses(
        (status = 200, description = "The option with its new count", body = OptionResponse),
        (status = 404, description = "No option with this id", body = ErrorBody),
        (status = 422, description = "Id is not an integer", body = ErrorBody)
    ),
    tag = "polls"
)]
pub async fn vote_for_option(
    State(state): State<Arc<AppState>>,
    path: PathId,
) -> Result<Json<OptionResponse>, ApiError> {
    let option_id = path.key("Option")?;
    let mut session = state.session().await?;
    let option = session.options().vote(option_id).await?;

    tracing::info!(
        option_id,
        poll_id = option.poll_id,
        vote_count = option.vote_count,
        "vote recorded"
    );
    Ok(Json(OptionResponse::from(option)))
}

/// Vote routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/vote/{option_id}", post(vote_for_option))
}
