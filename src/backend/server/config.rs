/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration
 * and opening the SQLite database.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (after `.env` has
 * been applied by the binary), with defaults for local development:
 *
 * | Variable         | Default                            |
 * |------------------|------------------------------------|
 * | `DATABASE_URL`   | `sqlite://devconnect.db?mode=rwc`  |
 * | `JWT_SECRET`     | development secret (warned about)  |
 * | `SERVER_PORT`    | `5000`                             |
 * | `BCRYPT_COST`    | `10` (4 to 31)                     |
 * | `TOKEN_TTL_SECS` | `3600`                             |
 *
 * # Error Handling
 *
 * Malformed values are a `ConfigError`. A database that cannot be opened
 * does not prevent server startup: the pool is set to `None` and the data
 * endpoints answer 503.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::backend::auth::password::DEFAULT_BCRYPT_COST;
use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://devconnect.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 5000;
const DEV_JWT_SECRET: &str = "devconnect-development-secret";

const SCHEMA: &str = include_str!("schema.sql");

/// Configuration error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub token_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            port: DEFAULT_PORT,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }
}

fn parse_var<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
        value,
    })
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            config.database_url = url;
        }

        match lookup("JWT_SECRET").filter(|v| !v.is_empty()) {
            Some(secret) => config.jwt_secret = secret,
            None => tracing::warn!("JWT_SECRET not set. Using the development secret."),
        }

        if let Some(port) = lookup("SERVER_PORT") {
            config.port = parse_var("SERVER_PORT", port)?;
        }

        if let Some(cost) = lookup("BCRYPT_COST") {
            let cost: u32 = parse_var("BCRYPT_COST", cost)?;
            if !(4..=31).contains(&cost) {
                return Err(ConfigError::InvalidValue {
                    key: "BCRYPT_COST",
                    value: cost.to_string(),
                    reason: "must be between 4 and 31".to_string(),
                });
            }
            config.bcrypt_cost = cost;
        }

        if let Some(ttl) = lookup("TOKEN_TTL_SECS") {
            let secs: u64 = parse_var("TOKEN_TTL_SECS", ttl)?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "TOKEN_TTL_SECS",
                    value: secs.to_string(),
                    reason: "must be positive".to_string(),
                });
            }
            config.token_ttl = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

/// Create the tables if they do not exist yet
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Open a database pool and bootstrap the schema
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Open a private in-memory database with the schema applied
///
/// The pool holds a single connection that is never recycled, since every
/// SQLite in-memory connection is its own database.
pub async fn open_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Load and initialize the database connection pool
///
/// # Returns
///
/// - `Some(SqlitePool)` if the database is opened and the schema applied
/// - `None` if that fails; the server then runs without data endpoints
pub async fn load_database(database_url: &str) -> Option<SqlitePool> {
    tracing::info!("Connecting to database...");

    match connect_database(database_url).await {
        Ok(pool) => {
            tracing::info!("Database ready");
            Some(pool)
        }
        Err(e) => {
            tracing::error!("Failed to open database: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            None
        }
    }
}
