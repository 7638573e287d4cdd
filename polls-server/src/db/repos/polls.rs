//! Poll repository
//!
//! - create: poll + options in one transaction, generated fields read back
//!   with `RETURNING`
//! - list/get: one LEFT JOIN, folded into nested polls (no N+1)
//! - delete: options go with the poll through `ON DELETE CASCADE`

use chrono::{DateTime, Utc};
use sqlx::{Connection, FromRow, PgConnection};

use super::{DbError, PollOption};
use crate::models::{NewPoll, OptionText};

/// Poll record with its options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub id: i32,
    pub question_text: String,
    pub created_at: DateTime<Utc>,
    pub options: Vec<PollOption>,
}

/// Row of `polls` as returned by INSERT ... RETURNING
#[derive(Debug, FromRow)]
struct PollRow {
    id: i32,
    question_text: String,
    created_at: DateTime<Utc>,
}

/// One row of `polls LEFT JOIN options`; option columns are NULL for polls
/// without options.
#[derive(Debug, FromRow)]
struct PollOptionRow {
    id: i32,
    question_text: String,
    created_at: DateTime<Utc>,
    option_id: Option<i32>,
    option_text: Option<String>,
    vote_count: Option<i32>,
}

const LIST_POLLS: &str = r#"
    SELECT p.id, p.question_text, p.created_at,
           o.id AS option_id, o.option_text, o.vote_count
    FROM polls p
    LEFT JOIN options o ON o.poll_id = p.id
    ORDER BY p.id, o.id
"#;

const GET_POLL: &str = r#"
    SELECT p.id, p.question_text, p.created_at,
           o.id AS option_id, o.option_text, o.vote_count
    FROM polls p
    LEFT JOIN options o ON o.poll_id = p.id
    WHERE p.id = $1
    ORDER BY o.id
"#;

/// Fold joined rows into polls. Rows must be grouped by poll id.
fn assemble(rows: Vec<PollOptionRow>) -> Vec<Poll> {
    let mut polls: Vec<Poll> = Vec::new();

    for row in rows {
        if polls.last().map(|p| p.id) != Some(row.id) {
            polls.push(Poll {
                id: row.id,
                question_text: row.question_text,
                created_at: row.created_at,
                options: Vec::new(),
            });
        }

        if let (Some(id), Some(option_text), Some(vote_count), Some(poll)) =
            (row.option_id, row.option_text, row.vote_count, polls.last_mut())
        {
            poll.options.push(PollOption {
                id,
                poll_id: poll.id,
                option_text,
                vote_count,
            });
        }
    }

    polls
}

/// Poll repository
pub struct PollRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PollRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Create a poll and its options atomically.
    ///
    /// Either the poll and every option are committed, or nothing is.
    pub async fn create(&mut self, poll: NewPoll) -> Result<Poll, DbError> {
        let mut tx = self.conn.begin().await?;

        let row: PollRow = sqlx::query_as(
            r#"
            INSERT INTO polls (question_text)
            VALUES ($1)
            RETURNING id, question_text, created_at
            "#,
        )
        .bind(poll.question.as_str())
        .fetch_one(&mut *tx)
        .await?;

        let texts: Vec<String> = poll.options.into_iter().map(OptionText::into_string).collect();

        let mut options: Vec<PollOption> = sqlx::query_as(
            r#"
            INSERT INTO options (poll_id, option_text)
            SELECT $1, t.option_text
            FROM UNNEST($2::text[]) WITH ORDINALITY AS t(option_text, ord)
            ORDER BY t.ord
            RETURNING id, poll_id, option_text, vote_count
            "#,
        )
        .bind(row.id)
        .bind(texts)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        // Serial ids follow insertion order
        options.sort_by_key(|o| o.id);

        Ok(Poll {
            id: row.id,
            question_text: row.question_text,
            created_at: row.created_at,
            options,
        })
    }

    /// List every poll with its options.
    pub async fn list(&mut self) -> Result<Vec<Poll>, DbError> {
        let rows: Vec<PollOptionRow> = sqlx::query_as(LIST_POLLS)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(assemble(rows))
    }

    /// Get a single poll by ID with its options.
    pub async fn get(&mut self, id: i32) -> Result<Poll, DbError> {
        let rows: Vec<PollOptionRow> = sqlx::query_as(GET_POLL)
            .bind(id)
            .fetch_all(&mut *self.conn)
            .await?;

        assemble(rows).into_iter().next().ok_or(DbError::NotFound {
            resource: "Poll",
            id,
        })
    }

    /// Delete a poll; its options are removed by the foreign key cascade.
    pub async fn delete(&mut self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM polls WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Poll",
                id,
            });
        }

        Ok(())
    }
}
