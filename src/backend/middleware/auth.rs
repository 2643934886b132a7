/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies the bearer token from the
 * Authorization header and provides the user identity to handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::sessions::strip_bearer;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from the token claims
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub name: String,
    pub avatar: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Verifies signature and expiry
/// 3. Checks the user still exists
/// 4. Attaches user data to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the token is missing, invalid, expired or
/// belongs to a deleted user.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthorized
        })?;

    let token = strip_bearer(auth_header).ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::Unauthorized
    })?;

    let claims = app_state.auth.tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::Unauthorized
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        ApiError::Unauthorized
    })?;

    let pool = app_state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::DatabaseUnavailable
    })?;

    if !verify_user_exists(pool, user_id).await? {
        tracing::warn!("User not found in database: {}", user_id);
        return Err(ApiError::Unauthorized);
    }

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        name: claims.name,
        avatar: claims.avatar,
    });

    Ok(next.run(request).await)
}

/// Verify user exists in database
async fn verify_user_exists(pool: &SqlitePool, user_id: Uuid) -> Result<bool, sqlx::Error> {
    use crate::backend::auth::users::get_user_by_id;

    Ok(get_user_by_id(pool, user_id).await?.is_some())
}

/// Axum extractor for authenticated user
///
/// This can be used as a parameter in handlers to automatically extract
/// the authenticated user from request extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
