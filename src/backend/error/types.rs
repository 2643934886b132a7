/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the request handlers.
 * Every handler returns `Result<_, ApiError>`; the conversion module turns
 * the error into an HTTP response.
 *
 * # Error Categories
 *
 * ## Field Errors
 *
 * Failures the user can fix from the form. They are rendered as a flat
 * field-keyed JSON object so the client can show each message next to
 * its input:
 * - `DuplicateEmail`, `UserNotFound`, `IncorrectPassword`
 * - `Validation` (any constraint violation, including duplicate handles)
 * - `ProfileNotFound`, `EntryNotFound`
 *
 * ## Request Errors
 *
 * - `Unauthorized` - missing, malformed, expired or orphaned token
 * - `DatabaseUnavailable` - the server started without a database
 *
 * ## Internal Errors
 *
 * Persistence, hashing and signing failures. They are logged where they
 * are converted and reported to the client as a generic 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::FieldErrors;

/// Handler error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Registration with an email that already has an account
    #[error("email already exists")]
    DuplicateEmail,

    /// Login with an email that has no account
    #[error("user not found")]
    UserNotFound,

    /// Login with a wrong password
    #[error("incorrect password")]
    IncorrectPassword,

    /// Field-level validation failure
    #[error(transparent)]
    Validation(#[from] FieldErrors),

    /// Mutation of the current user's profile when none exists
    #[error("no profile for this user")]
    ProfileNotFound,

    /// Deletion of an education or experience entry that does not exist
    #[error("{collection} entry not found")]
    EntryNotFound {
        /// `education` or `experience`
        collection: &'static str,
    },

    /// Missing or invalid bearer token
    #[error("unauthorized")]
    Unauthorized,

    /// The server runs without a database
    #[error("database not configured")]
    DatabaseUnavailable,

    /// Store read or write failure
    #[error("persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    /// Token signing failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a validation error for a single field
    pub fn field(field: &str, message: &str) -> Self {
        Self::Validation(FieldErrors::single(field, message))
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `DuplicateEmail`, `IncorrectPassword`, `Validation` - 400 Bad Request
    /// - `UserNotFound`, `ProfileNotFound`, `EntryNotFound` - 404 Not Found
    /// - `Unauthorized` - 401 Unauthorized
    /// - `DatabaseUnavailable` - 503 Service Unavailable
    /// - internal errors - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail | Self::IncorrectPassword | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UserNotFound | Self::ProfileNotFound | Self::EntryNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Persistence(_) | Self::PasswordHash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Field-keyed messages for errors the user can act on
    ///
    /// Returns `None` for request and internal errors.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            Self::DuplicateEmail => Some(FieldErrors::single("email", "Email already exists")),
            Self::UserNotFound => Some(FieldErrors::single("email", "User not found")),
            Self::IncorrectPassword => Some(FieldErrors::single("password", "Incorrect Password")),
            Self::Validation(errors) => Some(errors.clone()),
            Self::ProfileNotFound => Some(FieldErrors::single(
                "noprofile",
                "There is no profile for this user",
            )),
            Self::EntryNotFound { collection } => Some(FieldErrors::single(
                *collection,
                format!("No {} entry with that id", collection),
            )),
            _ => None,
        }
    }

    /// Message safe to show to clients
    ///
    /// Internal errors never leak their cause.
    pub fn message(&self) -> String {
        match self {
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::DatabaseUnavailable => "Database not configured".to_string(),
            Self::Persistence(_) | Self::PasswordHash(_) | Self::Token(_) => {
                "Server error".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}
