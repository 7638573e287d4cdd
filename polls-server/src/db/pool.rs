//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool sizing and timeouts
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Create a PostgreSQL connection pool with default settings.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/polls").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, &PoolSettings::default()).await
}

/// Create a PostgreSQL connection pool with custom settings.
pub async fn create_pool_with_options(
    database_url: &str,
    settings: &PoolSettings,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        max_connections = settings.max_connections,
        acquire_timeout_ms = settings.acquire_timeout.as_millis() as u64,
        "connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = PoolSettings::default();
        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(5));
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p polls-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
