use crate::error::DbError;
use configuration::settings::DbSettings;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;

/// Opens the database connection for one interactive session.
///
/// The pool is capped at a single connection, so every statement of the
/// session runs over the same connection. Close it with `PgPool::close`
/// when the session ends.
pub async fn connect(settings: &DbSettings) -> Result<PgPool, DbError> {
    let options = settings
        .url
        .parse::<PgConnectOptions>()
        .map_err(DbError::ConnectionError)?
        .username(&settings.username)
        .password(&settings.password);

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
        .map_err(DbError::ConnectionError)?;

    tracing::info!(username = %settings.username, "Connected to the database.");
    Ok(pool)
}

/// The development bootstrap: applies the embedded migrations.
///
/// This creates the `account` and `moon_mission` tables and seeds the
/// reference missions plus one development account.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Development migrations applied.");
    Ok(())
}
