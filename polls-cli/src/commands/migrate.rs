//! Create the database tables and exit

use anyhow::{Context, Result};
use clap::Parser;

use polls_server::db::ensure_schema;

use crate::config::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.db.connect().await?;

    ensure_schema(&pool)
        .await
        .context("Failed to create database tables")?;

    pool.close().await;
    println!("Database schema is up to date");
    Ok(())
}
