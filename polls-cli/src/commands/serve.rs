//! HTTP server command
//!
//! Creates tables if needed, then serves the polls API until Ctrl+C/SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use polls_server::db::ensure_schema;
use polls_server::{run_server, ServerConfig};

use crate::config::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "POLLS_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Allowed CORS origin (repeatable); all origins when omitted
    #[arg(long = "cors-origin", env = "POLLS_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Don't create missing tables at startup
    #[arg(long)]
    pub skip_migrations: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig::new(args.bind, &args.cors_origins)
        .context("Invalid server configuration")?;

    let pool = args.db.connect().await?;

    if args.skip_migrations {
        tracing::info!("Skipping schema creation");
    } else {
        ensure_schema(&pool)
            .await
            .context("Failed to create database tables")?;
    }

    tracing::info!("Starting polls server on {}", args.bind);

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
