/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The optional SQLite connection pool
 * - The auth settings (token issuer and password hasher)
 *
 * Nothing else is shared between requests; the pool is the only
 * resource handlers contend for.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`:
 *
 * ```rust,ignore
 * async fn handler(State(pool): State<Option<SqlitePool>>) {
 *     let pool = require_pool(pool)?;
 *     // ...
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::AuthSettings;
use crate::backend::error::ApiError;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database could not be opened at startup.
    /// Handlers answer 503 in that case.
    pub db_pool: Option<SqlitePool>,

    /// Token issuer and password hasher
    pub auth: AuthSettings,
}

impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for AuthSettings {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

/// Unwrap the optional pool, or fail with 503
pub fn require_pool(pool: Option<SqlitePool>) -> Result<SqlitePool, ApiError> {
    pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::DatabaseUnavailable
    })
}
