//! DevConnect - Main Library
//!
//! DevConnect is a developer-profile service: people register, log in and
//! publish a profile with their skills, social links, education and work
//! experience.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between backend and client
//!   - Request and response bodies, token claims
//!   - Validation rules and the field-keyed error map
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP API for `/api/users` and `/api/profile`
//!   - SQLite persistence, bcrypt hashing, JWT bearer tokens
//!
//! - **`client`** - Client action layer
//!   - Typed HTTP client for the API
//!   - Unidirectional state container (actions and a pure reducer)
//!   - Form state helpers
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend module and the server binary
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use devconnect::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Client
//!
//! ```rust,no_run
//! use devconnect::client::{ApiClient, ClientConfig};
//!
//! # async fn example() {
//! let client = ApiClient::new(ClientConfig::from_env());
//! let profiles = client.get_profiles().await;
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Client action layer
pub mod client;
