//! polls CLI - runs the polls HTTP backend
//!
//! - `serve`: create tables if missing and serve the API
//! - `migrate`: create tables and exit
//! - `completions`: shell completion scripts

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "polls",
    author,
    version,
    about = "Polls API backend: create polls, list them, vote on options"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (needs the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables if they don't exist
    Migrate(commands::migrate::MigrateArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so `env = ...` args see .env values
    let dotenv_path = dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::Completions(args) => run_completions(args),
    };

    tracing_setup::shutdown_otel();
    result
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
