//! Scoped database session
//!
//! A [`DbSession`] holds one pooled connection for one unit of work (one
//! request). The connection goes back to the pool when the session is
//! dropped, whether the handler returned normally, failed with `?`, or
//! unwound.

use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use super::{DbError, OptionRepo, PollRepo};

/// One pooled connection, released on drop
pub struct DbSession {
    conn: PoolConnection<Postgres>,
}

impl DbSession {
    /// Acquire a connection from the pool.
    ///
    /// Fails once the pool's acquire timeout elapses (database down or pool
    /// exhausted).
    pub async fn acquire(pool: &PgPool) -> Result<Self, DbError> {
        let conn = pool.acquire().await?;
        tracing::trace!("db session acquired");
        Ok(Self { conn })
    }

    /// Poll operations on this session's connection.
    pub fn polls(&mut self) -> PollRepo<'_> {
        PollRepo::new(&mut self.conn)
    }

    /// Option operations on this session's connection.
    pub fn options(&mut self) -> OptionRepo<'_> {
        OptionRepo::new(&mut self.conn)
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        tracing::trace!("db session released");
    }
}
