//! Poll endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::error::{ApiError, ErrorBody};
use crate::http::extractors::{PathId, ValidJson};
use crate::http::schemas::{CreatePollRequest, PollResponse};
use crate::http::server::AppState;

/// POST /polls - create a poll with its options
#[utoipa::path(
    post,
    path = "/api/polls",
    request_body = CreatePollRequest,
    responses(
        (status = 201, description = "Poll created with its options", body = PollResponse),
        (status = 422, description = "Invalid request body", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "polls"
)]
pub async fn create_poll(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreatePollRequest>,
) -> Result<(StatusCode, Json<PollResponse>), ApiError> {
    // Validate before a connection is taken from the pool
    let new_poll = req.validate()?;

    let mut session = state.session().await?;
    let poll = session.polls().create(new_poll).await?;

    tracing::info!(poll_id = poll.id, options = poll.options.len(), "poll created");
    Ok((StatusCode::CREATED, Json(PollResponse::from(poll))))
}

/// GET /polls - list all polls with their options
#[utoipa::path(
    get,
    path = "/api/polls",
    responses(
        (status = 200, description = "Every poll with its options", body = Vec<PollResponse>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "polls"
)]
pub async fn list_polls(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PollResponse>>, ApiError> {
    let mut session = state.session().await?;
    let polls = session.polls().list().await?;

    Ok(Json(polls.into_iter().map(PollResponse::from).collect()))
}

/// GET /polls/{poll_id} - get a single poll
#[utoipa::path(
    get,
    path = "/api/polls/{poll_id}",
    params(("poll_id" = i64, Path, description = "Poll id")),
    responses(
        (status = 200, description = "The poll with its options", body = PollResponse),
        (status = 404, description = "No poll with this id", body = ErrorBody),
        (status = 422, description = "Id is not an integer", body = ErrorBody)
    ),
    tag = "polls"
)]
pub async fn get_poll(
    State(state): State<Arc<AppState>>,
    path: PathId,
) -> Result<Json<PollResponse>, ApiError> {
    let poll_id = path.key("Poll")?;
    let mut session = state.session().await?;
    let poll = session.polls().get(poll_id).await?;

    Ok(Json(PollResponse::from(poll)))
}

/// Poll routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/polls", get(list_polls).post(create_poll))
        .route("/polls/{poll_id}", get(get_poll))
}
