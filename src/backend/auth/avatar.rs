//! Gravatar URLs
//!
//! The avatar is derived from the email, so no upload flow is needed:
//! Gravatar serves the image registered for the email hash, or the
//! "mystery man" placeholder.

use md5::{Digest, Md5};

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar/";

/// Size 200, PG rating, mystery-man fallback
const GRAVATAR_OPTIONS: &str = "s=200&r=pg&d=mm";

/// Build the Gravatar URL for an email
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Md5::digest(normalized.as_bytes());
    format!("{}{}?{}", GRAVATAR_BASE, hex::encode(digest), GRAVATAR_OPTIONS)
}
