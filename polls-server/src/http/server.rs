//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS unless origins are configured
//! - Request tracing, one INFO line per response
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::routes;
use crate::db::{DbError, DbSession};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,

    /// Origins allowed by CORS. Empty means any origin.
    pub cors_origins: Vec<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Build a config from a bind address and origin strings
    /// (e.g. `https://polls.example.com`).
    pub fn new(bind_addr: SocketAddr, cors_origins: &[String]) -> Result<Self, ServerError> {
        let cors_origins = cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .map_err(|_| ServerError::InvalidOrigin(origin.clone()))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            bind_addr,
            cors_origins,
        })
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a scoped session for one request.
    pub async fn session(&self) -> Result<DbSession, DbError> {
        DbSession::acquire(&self.pool).await
    }
}

fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins.iter().cloned()))
    }
}

/// Build the application router: `/`, the API docs, and everything under `/api`.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::index::router())
        .merge(routes::docs::router())
        .nest("/api", routes::api_router())
        .layer(cors_layer(&config.cors_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// ensure_schema(&pool).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    if config.cors_origins.is_empty() {
        tracing::info!("CORS: all origins allowed");
    } else {
        tracing::info!(origins = config.cors_origins.len(), "CORS: restricted origins");
    }

    let app = build_router(AppState::new(pool), &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CORS origin: '{0}'")]
    InvalidOrigin(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn config_parses_origins() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 9000));
        let config = ServerConfig::new(addr, &[" https://polls.example ".to_string()]).unwrap();
        assert_eq!(config.cors_origins, [HeaderValue::from_static("https://polls.example")]);
    }

    #[test]
    fn config_rejects_bad_origin() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 9000));
        let err = ServerConfig::new(addr, &["bad\norigin".to_string()]).unwrap_err();
        assert!(matches!(err, ServerError::InvalidOrigin(_)));
    }
}
