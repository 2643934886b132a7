//! Authentication Module
//!
//! This module handles user registration, login and bearer tokens.
//! It provides HTTP handlers for the `/api/users` endpoints and manages
//! user records, password hashes and JWT tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - JWT token generation and validation
//! - **`password`** - bcrypt hashing on the blocking pool
//! - **`avatar`** - Gravatar URL derivation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and AuthSettings
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! ├── password.rs     - Password hashing
//! ├── avatar.rs       - Gravatar URLs
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── current.rs  - Current user and smoke-test handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → avatar derived, password hashed → user returned
//! 2. **Login**: email and password → hash compared → `Bearer <jwt>` returned
//! 3. **Current**: bearer token → middleware verifies token and user → user info returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (per-hash random salt) before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after one hour by default
//! - Password hashes are never returned in responses

use std::time::Duration;

use crate::backend::server::config::ServerConfig;

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Password hashing
pub mod password;

/// Gravatar URLs
pub mod avatar;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{current_user, login, register, users_test};
pub use password::PasswordHasher;
pub use sessions::TokenIssuer;

/// Token issuer and password hasher shared by the auth handlers and middleware
#[derive(Clone)]
pub struct AuthSettings {
    pub tokens: TokenIssuer,
    pub hasher: PasswordHasher,
}

impl AuthSettings {
    pub fn new(secret: &str, token_ttl: Duration, bcrypt_cost: u32) -> Self {
        Self {
            tokens: TokenIssuer::new(secret, token_ttl),
            hasher: PasswordHasher::new(bcrypt_cost),
        }
    }

    /// Build the auth settings from the server configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl, config.bcrypt_cost)
    }
}
