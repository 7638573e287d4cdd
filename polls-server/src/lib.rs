//! polls-server: HTTP backend for a polling application
//!
//! Create polls with options, list and fetch them, vote on options, and
//! answer liveness probes from a load balancer. State lives in PostgreSQL.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
