//! Backend Error Module
//!
//! Error types returned by HTTP handlers and their conversion into
//! HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! User-facing failures render as field-keyed JSON; persistence, hashing
//! and signing failures are logged and rendered as a generic 500.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
