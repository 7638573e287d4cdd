//! Table creation at startup
//!
//! Idempotent: every statement is `IF NOT EXISTS`, and the whole batch runs
//! under a transaction-scoped advisory lock so replicas starting together
//! don't race on the catalog.

use sqlx::PgPool;

/// Advisory lock key held while creating tables
const SCHEMA_LOCK_KEY: i64 = 0x706f_6c6c_735f_6462;

const CREATE_POLLS: &str = r#"
    CREATE TABLE IF NOT EXISTS polls (
        id SERIAL PRIMARY KEY,
        question_text VARCHAR(255) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_OPTIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS options (
        id SERIAL PRIMARY KEY,
        option_text VARCHAR(255) NOT NULL,
        vote_count INTEGER NOT NULL DEFAULT 0 CHECK (vote_count >= 0),
        poll_id INTEGER NOT NULL REFERENCES polls(id) ON DELETE CASCADE
    )
"#;

const CREATE_OPTIONS_POLL_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_options_poll_id ON options (poll_id)";

/// Create the `polls` and `options` tables if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring database schema...");

    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    for statement in [CREATE_POLLS, CREATE_OPTIONS, CREATE_OPTIONS_POLL_INDEX] {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    tracing::info!("Database schema ready");
    Ok(())
}
