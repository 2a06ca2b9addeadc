use std::env;

use crate::error::AppError;

/// Default location of the article store, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "./articles.db";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_POOL_MAX: u32 = 5;

/// Which SQLite store the application talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// Single-file store. `None` means "use `ARTICLES_DB_FILE` or the default path".
    SqliteFile { file: Option<String> },
    /// Private in-memory store, gone when the pool closes (tests)
    InMemory,
}

/// Pool and per-connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// SQLite lock wait (`PRAGMA busy_timeout`); 0 disables waiting
    pub busy_timeout_ms: u64,
    /// How long a request may wait for a pooled connection; never 0
    pub acquire_timeout_ms: u64,
    pub pool_max: u32,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            acquire_timeout_ms: DEFAULT_ACQUIRE_TIMEOUT_MS,
            pool_max: DEFAULT_POOL_MAX,
        }
    }
}

impl ConnectionSettings {
    /// Read `ARTICLES_DB_BUSY_TIMEOUT_MS`, `ARTICLES_DB_ACQUIRE_TIMEOUT_MS` and
    /// `ARTICLES_DB_POOL_MAX`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let busy_timeout_ms =
            parse_var("ARTICLES_DB_BUSY_TIMEOUT_MS")?.unwrap_or(defaults.busy_timeout_ms);
        let acquire_timeout_ms =
            parse_var("ARTICLES_DB_ACQUIRE_TIMEOUT_MS")?.unwrap_or(defaults.acquire_timeout_ms);
        let pool_max = parse_var("ARTICLES_DB_POOL_MAX")?.unwrap_or(defaults.pool_max);
        if acquire_timeout_ms == 0 {
            return Err(AppError::config(
                "ARTICLES_DB_ACQUIRE_TIMEOUT_MS must be at least 1",
            ));
        }
        if pool_max == 0 {
            return Err(AppError::config(
                "ARTICLES_DB_POOL_MAX must be at least 1",
            ));
        }
        Ok(Self {
            busy_timeout_ms,
            acquire_timeout_ms,
            pool_max,
        })
    }
}

/// Builds the SQLite connection URL for a profile
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::SqliteFile { file } => {
            let path = match file {
                Some(path) => path.clone(),
                None => db_file()?,
            };
            if path.trim().is_empty() {
                return Err(AppError::config("SQLite file path must not be empty"));
            }
            Ok(format!("sqlite://{path}"))
        }
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get database file from environment (defaults to `./articles.db`)
fn db_file() -> Result<String, AppError> {
    Ok(env::var("ARTICLES_DB_FILE").unwrap_or_else(|_| DEFAULT_DB_FILE.to_string()))
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has an invalid value: '{raw}'"
            ))
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
