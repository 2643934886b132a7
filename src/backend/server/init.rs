/**
 * Server Initialization
 *
 * This module handles the setup of the Axum application: opening the
 * database, building the auth settings and configuring the router.
 *
 * # Initialization Process
 *
 * 1. Open the database and bootstrap the schema (optional)
 * 2. Build the token issuer and password hasher from the configuration
 * 3. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::auth::AuthSettings;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// A database that cannot be opened is logged and the server continues
/// without it; data endpoints then answer 503.
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing DevConnect backend server");

    let db_pool = load_database(&config.database_url).await;
    let auth = AuthSettings::from_config(config);

    tracing::info!(
        "Auth configured (token ttl {}s, bcrypt cost {})",
        config.token_ttl.as_secs(),
        config.bcrypt_cost
    );

    build_app(db_pool, auth)
}

/// Build the router around an already opened pool
pub fn build_app(db_pool: Option<SqlitePool>, auth: AuthSettings) -> Router<()> {
    let app_state = AppState { db_pool, auth };
    create_router(app_state)
}
