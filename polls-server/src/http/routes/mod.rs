//! Route handlers organized by resource

pub mod docs;
pub mod health;
pub mod index;
pub mod polls;
pub mod votes;

use std::sync::Arc;

use axum::Router;

use crate::http::server::AppState;

/// Everything served under `/api`
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::router())
        .merge(polls::router())
        .merge(votes::router())
}
