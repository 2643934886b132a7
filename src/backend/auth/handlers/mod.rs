//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the `/api/users` endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── current.rs  - Current user and smoke-test handlers
//! ```
//!
//! # Handlers
//!
//! - **`users_test`** - GET /api/users/test - Public smoke test
//! - **`register`** - POST /api/users/register - User registration
//! - **`login`** - POST /api/users/login - User authentication
//! - **`current_user`** - GET /api/users/current - Current user info (bearer)
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{routing::{get, post}, Router};
//! use devconnect::backend::auth::handlers::{login, register, users_test};
//!
//! let router = Router::new()
//!     .route("/api/users/test", get(users_test))
//!     .route("/api/users/register", post(register))
//!     .route("/api/users/login", post(login));
//! ```

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod current;

pub use current::{current_user, users_test};
pub use login::login;
pub use register::register;
