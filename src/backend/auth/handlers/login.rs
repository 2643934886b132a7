/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/users/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Sign a JWT carrying id, name and avatar
 * 4. Return it with the `Bearer ` prefix
 *
 * # Security
 *
 * - Passwords are verified using bcrypt on the blocking pool
 * - Tokens expire after the configured lifetime (one hour by default)
 * - Passwords are never logged or returned in responses
 */
use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_email;
use crate::backend::auth::AuthSettings;
use crate::backend::error::ApiError;
use crate::shared::{LoginRequest, LoginResponse};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, or `{password: "Incorrect Password"}`
/// * `404 Not Found` - `{email: "User not found"}`
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Example Response
///
/// ```json
/// {
///   "success": true,
///   "token": "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(pool): State<Option<SqlitePool>>,
    State(auth): State<AuthSettings>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.check()?;

    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::DatabaseUnavailable
    })?;
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&pool, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            ApiError::Persistence(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            ApiError::UserNotFound
        })?;

    let valid = auth
        .hasher
        .verify(request.password, user.password_hash.clone())
        .await?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(ApiError::IncorrectPassword);
    }

    let token = auth
        .tokens
        .issue_bearer(user.id, &user.name, &user.avatar)
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            ApiError::Token(e)
        })?;

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok(Json(LoginResponse { success: true, token }))
}
