use anyhow::Context;
use clap::Parser;
use console::{AuthOutcome, ConsoleError};
use core_types::PlaintextVerifier;
use database::{connect, run_migrations, DbRepository};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Mission Control console.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_tracing();

    // Load APP_DB_* (and DEV_MODE) from a .env file, when there is one.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded.");
    }

    // Configuration and connection errors are fatal and surface before any prompt.
    let settings = configuration::load_config().context("Failed to load DB configuration")?;
    let pool = connect(&settings)
        .await
        .context("Database connection failed")?;
    let db_repo = DbRepository::new(pool);

    let result = run(&cli, &db_repo).await;

    // Every exit path past this point releases the connection.
    db_repo.close().await;
    result
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Log in, browse the moon mission reference table and manage accounts.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Run the development bootstrap (create the schema, seed missions) first.
    #[arg(long, env = "DEV_MODE", value_parser = clap::builder::FalseyValueParser::new())]
    dev: bool,
}

async fn run(cli: &Cli, db_repo: &DbRepository) -> anyhow::Result<()> {
    if cli.dev {
        tracing::info!("Development mode: running the database bootstrap.");
        run_migrations(db_repo.pool())
            .await
            .context("Development bootstrap failed")?;
    }

    let mut term = console::stdio();
    match console::run_session(db_repo, &PlaintextVerifier, &mut term).await {
        Ok(AuthOutcome::Authenticated) => tracing::info!("Session ended from the main menu."),
        Ok(AuthOutcome::Aborted) => tracing::info!("Session ended at the login prompt."),
        Err(ConsoleError::InputClosed) => tracing::info!("Input closed; ending the session."),
        Err(e) => return Err(e).context("Interactive session failed"),
    }
    Ok(())
}

/// Logs to a daily rolling file under `logs/`. The terminal is reserved for
/// the interactive session.
fn init_tracing() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "mission-control.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}
