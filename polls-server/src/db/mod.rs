//! Database layer - connection pool, schema and repositories
//!
//! - One pooled connection per request, wrapped in [`DbSession`]
//! - List/get use a single JOIN (no N+1)
//! - Writes that touch several rows run in one transaction
//! - Vote counts change through a single atomic UPDATE

pub mod pool;
pub mod repos;
pub mod schema;
pub mod session;

pub use pool::{create_pool, create_pool_with_options, PoolSettings};
pub use repos::*;
pub use schema::ensure_schema;
pub use session::DbSession;
pub use sqlx::PgPool;
