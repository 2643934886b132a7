/**
 * Bearer Tokens
 *
 * This module signs and verifies the JWTs handed out at login.
 * Tokens are stateless: nothing is stored server-side, a token is valid
 * for as long as its signature checks out and `exp` has not passed.
 */

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::shared::user::{TokenClaims, BEARER_PREFIX};

/// Default token lifetime (1 hour)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Signs and verifies HS256 tokens with a shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer for a secret and token lifetime
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a signed token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID, stored as `sub`
    /// * `name` - Display name
    /// * `avatar` - Avatar URL
    ///
    /// # Returns
    /// The bare JWT string (no `Bearer ` prefix)
    pub fn issue(
        &self,
        user_id: Uuid,
        name: &str,
        avatar: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp().max(0) as u64;

        let claims = TokenClaims {
            sub: user_id.to_string(),
            name: name.to_string(),
            avatar: avatar.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Create a signed token and prefix it with `Bearer `
    pub fn issue_bearer(
        &self,
        user_id: Uuid,
        name: &str,
        avatar: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        Ok(format!("{}{}", BEARER_PREFIX, self.issue(user_id, name, avatar)?))
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        let token_data = decode::<TokenClaims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

/// Extract the token from an `Authorization` header value
pub fn strip_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
