//! Option repository
//!
//! Options are only ever created together with their poll (see
//! [`super::PollRepo::create`]). The one mutation is the vote, which is a
//! single `UPDATE ... SET vote_count = vote_count + 1`, so concurrent votes
//! never overwrite each other.

use sqlx::{FromRow, PgConnection};

use super::DbError;

/// Option record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PollOption {
    pub id: i32,
    pub poll_id: i32,
    pub option_text: String,
    pub vote_count: i32,
}

/// Option repository
pub struct OptionRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> OptionRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Add one vote to an option and return its new state.
    ///
    /// The increment and the read-back happen in one statement; a missing
    /// option yields `NotFound` and touches nothing.
    pub async fn vote(&mut self, id: i32) -> Result<PollOption, DbError> {
        sqlx::query_as(
            r#"
            UPDATE options
            SET vote_count = vote_count + 1
            WHERE id = $1
            RETURNING id, poll_id, option_text, vote_count
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(DbError::NotFound {
            resource: "Option",
            id,
        })
    }

    /// Get a single option by ID.
    pub async fn get(&mut self, id: i32) -> Result<PollOption, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, poll_id, option_text, vote_count
            FROM options
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(DbError::NotFound {
            resource: "Option",
            id,
        })
    }
}
