//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - /api/users and /api/profile routes
//! ```
//!
//! # Route Organization
//!
//! 1. **Public Routes** - registration, login and profile lookups
//! 2. **Protected Routes** - everything acting on the caller's own account,
//!    behind the bearer-token middleware
//! 3. **Fallback Handler** - JSON 404 for unknown paths
//!
//! ## Public
//!
//! - `GET /api/users/test` - Smoke test
//! - `POST /api/users/register` - User registration
//! - `POST /api/users/login` - User login
//! - `GET /api/profile/handle/{handle}` - Profile by handle
//! - `GET /api/profile/user/{user_id}` - Profile by user ID
//! - `GET /api/profile/all` - All profiles
//!
//! ## Protected
//!
//! - `GET /api/users/current` - Current user
//! - `GET /api/profile` - Current user's profile
//! - `POST /api/profile` - Create or update profile
//! - `DELETE /api/profile` - Delete account
//! - `POST /api/profile/education` - Add education
//! - `DELETE /api/profile/education/{id}` - Delete education
//! - `POST /api/profile/experience` - Add experience
//! - `DELETE /api/profile/experience/{id}` - Delete experience

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
