//! Backend Module
//!
//! This module contains all server-side code for DevConnect: an Axum HTTP
//! API for developer accounts and profiles.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, JWT tokens, user storage
//! - **`profile`** - Profiles with education and experience entries
//! - **`middleware`** - Bearer-token authentication
//! - **`error`** - `ApiError` and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── profile/        - Profiles
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share `AppState`: the optional SQLite pool and the auth
//! settings. There is no other in-process mutable state; each request is
//! handled independently against the pool.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, ApiError>`. User-facing failures are
//! rendered as field-keyed JSON; internal failures are logged and
//! answered with a generic 500.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Profiles
pub mod profile;

/// Middleware for request processing
pub mod middleware;

pub use error::ApiError;
pub use server::{build_app, create_app, ServerConfig};
