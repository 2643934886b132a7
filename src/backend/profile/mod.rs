//! Profile Module
//!
//! Developer profiles: one per user, identified publicly by a unique handle,
//! with embedded education and experience collections.
//!
//! # Module Structure
//!
//! ```text
//! profile/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Profile and entry persistence
//! └── handlers.rs  - HTTP handlers for /api/profile
//! ```

/// Profile and entry persistence
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    add_education, add_experience, all_profiles, current_profile, delete_account,
    delete_education, delete_experience, profile_by_handle, profile_by_user, upsert_profile,
};
