/**
 * Password Hashing
 *
 * bcrypt hashing and verification. bcrypt generates a fresh random salt
 * for every hash and embeds it in the output, so the stored string is all
 * that is needed to verify later.
 *
 * Both operations are deliberately slow (tunable cost) and run on the
 * blocking thread pool so they never stall the async workers.
 */

use crate::backend::error::ApiError;

/// Default bcrypt cost
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// bcrypt hasher with a fixed cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh salt
    pub async fn hash(&self, password: String) -> Result<String, ApiError> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| ApiError::PasswordHash(e.to_string()))?
            .map_err(|e| ApiError::PasswordHash(e.to_string()))
    }

    /// Compare a password against a stored hash
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, ApiError> {
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| ApiError::PasswordHash(e.to_string()))?
            .map_err(|e| ApiError::PasswordHash(e.to_string()))
    }
}
