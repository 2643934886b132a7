/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/users/register.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password
 * 2. Reject the request if the email already has an account
 * 3. Derive the Gravatar avatar from the email
 * 4. Hash the password using bcrypt (fresh salt per hash)
 * 5. Insert the user and return it without the hash
 */
use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::avatar::gravatar_url;
use crate::backend::auth::users::{create_user, get_user_by_email, is_unique_violation, NewUser};
use crate::backend::auth::AuthSettings;
use crate::backend::error::ApiError;
use crate::shared::{RegisterRequest, UserResponse};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Field validation failed or the email is taken
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If hashing or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /api/users/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "password": "secret1",
///   "password2": "secret1"
/// }
/// ```
pub async fn register(
    State(pool): State<Option<SqlitePool>>,
    State(auth): State<AuthSettings>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    request.check().map_err(|errors| {
        tracing::warn!("Registration rejected: {}", errors);
        ApiError::Validation(errors)
    })?;

    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::DatabaseUnavailable
    })?;

    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::DuplicateEmail);
    }

    let avatar = gravatar_url(&request.email);
    let password_hash = auth.hasher.hash(request.password).await.map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        e
    })?;

    let new_user = NewUser {
        name: request.name,
        email: request.email,
        password_hash,
        avatar,
    };

    // A concurrent registration can still win the race past the lookup above
    let user = create_user(&pool, new_user).await.map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::DuplicateEmail
        } else {
            tracing::error!("Failed to create user: {:?}", e);
            ApiError::Persistence(e)
        }
    })?;

    tracing::info!("User registered: {} ({})", user.name, user.email);

    Ok(Json(user.into()))
}
