//! Test app fixtures
//!
//! Every fixture owns a fresh in-memory SQLite database, so tests never
//! share rows.

use axum::Router;
use axum_test::TestServer;
use sqlx::SqlitePool;

use devconnect::backend::auth::sessions::DEFAULT_TOKEN_TTL;
use devconnect::backend::auth::AuthSettings;
use devconnect::backend::build_app;
use devconnect::backend::server::config::open_in_memory;

/// Signing secret used by every test app
pub const TEST_SECRET: &str = "test-secret";

/// Lowest bcrypt cost, keeps hashing fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_auth_settings() -> AuthSettings {
    AuthSettings::new(TEST_SECRET, DEFAULT_TOKEN_TTL, TEST_BCRYPT_COST)
}

/// Application wired to its own in-memory database
pub struct TestApp {
    pool: SqlitePool,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = open_in_memory().await.expect("Failed to open test database");
        let router = build_app(Some(pool.clone()), test_auth_settings());
        Self { pool, router }
    }

    /// Application started without a database
    pub fn without_database() -> TestServer {
        TestServer::new(build_app(None, test_auth_settings())).expect("Failed to start test server")
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
