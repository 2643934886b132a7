/**
 * Current User Handlers
 *
 * GET /api/users/current returns the user behind the bearer token.
 * GET /api/users/test is a public smoke-test route.
 */
use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::require_pool;
use crate::shared::CurrentUserResponse;

/// Public route answering a fixed message
pub async fn users_test() -> Json<Value> {
    Json(json!({ "msg": "Users Works Fine" }))
}

/// Current user handler
///
/// Requires the auth middleware; the user was already checked to exist
/// there, but may have been deleted in between.
pub async fn current_user(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(auth_user): AuthUser,
) -> Result<Json<CurrentUserResponse>, ApiError> {
    let pool = require_pool(pool)?;

    let user = get_user_by_id(&pool, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token user no longer exists: {}", auth_user.user_id);
            ApiError::Unauthorized
        })?;

    Ok(Json(CurrentUserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        avatar: user.avatar,
    }))
}
