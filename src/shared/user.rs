//! User and Authentication Types
//!
//! Request and response bodies for the `/api/users` endpoints, plus the
//! token claims shared by the token issuer and the client that decodes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::shared::error::{validate_fields, FieldErrors};
use crate::shared::serde_helpers::trimmed;

/// Registration request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 30, message = "Name must be between 2 and 30 characters"))]
    pub name: String,
    /// Login email, must be unique
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    /// Plaintext password, hashed before storage and never echoed back
    #[serde(default)]
    #[validate(length(min = 6, max = 30, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Optional confirmation, checked against `password` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password2: Option<String>,
}

impl RegisterRequest {
    /// Validate all fields, including the confirmation match
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = validate_fields(self);
        if let Some(confirm) = &self.password2 {
            if confirm != &self.password {
                errors.insert("password2", "Passwords must match");
            }
        }
        errors.into_result()
    }
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password field is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn check(&self) -> Result<(), FieldErrors> {
        validate_fields(self).into_result()
    }
}

/// User record as returned to clients (never includes the password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Gravatar URL derived from the email
    pub avatar: String,
    /// Registration time
    pub date: DateTime<Utc>,
}

/// Body of `GET /api/users/current`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

/// Successful login body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    /// Bearer-prefixed token, ready to be used as an `Authorization` header
    pub token: String,
}

/// Claims carried by the signed bearer token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID
    pub sub: String,
    /// Display name at the time of login
    pub name: String,
    /// Avatar URL at the time of login
    pub avatar: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Prefix the server puts in front of issued tokens
pub const BEARER_PREFIX: &str = "Bearer ";
