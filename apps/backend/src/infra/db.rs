use std::str::FromStr;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, trace};

use crate::config::db::{db_url, ConnectionSettings, DbProfile};
use crate::error::AppError;
use crate::infra::seed::{seed_if_empty, SeedOutcome};

/// Build ordered session-level SQL statements applied to every new connection.
fn build_session_statements(settings: &ConnectionSettings) -> Vec<String> {
    vec![
        "PRAGMA foreign_keys = ON;".to_string(),
        format!("PRAGMA busy_timeout = {};", settings.busy_timeout_ms),
    ]
}

async fn apply_sqlite_config(
    conn: &mut sqlx::SqliteConnection,
    settings: &ConnectionSettings,
) -> Result<(), sqlx::Error> {
    for stmt in build_session_statements(settings) {
        sqlx::query(&stmt).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Open a pooled SQLite connection for the profile.
/// This function does NOT run any migrations.
pub async fn connect_db(
    profile: &DbProfile,
    settings: &ConnectionSettings,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    let connect_opts = SqliteConnectOptions::from_str(&url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true);

    let mut pool_opts = SqlitePoolOptions::new().min_connections(1);

    // Every in-memory connection is its own database; pin the pool to a single
    // connection that is never recycled.
    let pool_max = match profile {
        DbProfile::InMemory => {
            pool_opts = pool_opts
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
            1
        }
        DbProfile::SqliteFile { .. } => settings.pool_max,
    };

    let session_settings = settings.clone();
    let pool: SqlitePool = pool_opts
        .max_connections(pool_max)
        .acquire_timeout(Duration::from_millis(settings.acquire_timeout_ms))
        .after_connect(move |conn, _meta| {
            let settings = session_settings.clone();
            Box::pin(async move {
                apply_sqlite_config(conn, &settings).await?;
                trace!("db=sqlite hook=after_connect ok");
                Ok::<_, sqlx::Error>(())
            })
        })
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to open SQLite database {url}: {e}")))?;

    info!(
        "pool=create engine=sqlite path={} max={} busy_timeout_ms={} acquire_timeout_ms={}",
        url, pool_max, settings.busy_timeout_ms, settings.acquire_timeout_ms
    );

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Single entrypoint used before serving: connect, ensure the schema, seed an
/// empty store. Safe to run on every start.
pub async fn bootstrap_db(
    profile: &DbProfile,
    settings: &ConnectionSettings,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, settings).await?;

    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("schema migration failed: {e}")))?;

    match seed_if_empty(&conn).await? {
        SeedOutcome::Seeded(count) => info!(count, "bootstrap=seeded"),
        SeedOutcome::Skipped(existing) => info!(existing, "bootstrap=existing_data"),
    }

    Ok(conn)
}
