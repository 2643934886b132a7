/**
 * Profile Handlers
 *
 * HTTP handlers for the `/api/profile` endpoints.
 *
 * # Queries
 *
 * Absence is not an error on the query side: the current-user lookup
 * answers `{}`, lookups by handle or user ID answer `null`, and the
 * listing answers an empty array.
 *
 * # Mutations
 *
 * All mutations act on the authenticated user's own profile and answer
 * with the updated profile. Entries require an existing profile
 * (404 `noprofile` otherwise).
 */

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users::{delete_account as delete_user_account, is_unique_violation};
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::profile::db;
use crate::backend::server::state::require_pool;
use crate::shared::{
    DeleteAccountResponse, EducationRequest, ExperienceRequest, Profile, ProfileRequest,
};

const HANDLE_TAKEN: &str = "That handle already exists";

/// Reload the user's profile after a mutation
async fn reload_profile(pool: &SqlitePool, user_id: Uuid) -> Result<Json<Profile>, ApiError> {
    db::get_profile_by_user(pool, user_id)
        .await?
        .map(Json)
        .ok_or(ApiError::ProfileNotFound)
}

/// Resolve the profile ID of the user, or 404 `noprofile`
async fn require_profile_id(pool: &SqlitePool, user_id: Uuid) -> Result<Uuid, ApiError> {
    db::get_profile_id(pool, user_id).await?.ok_or_else(|| {
        tracing::warn!("No profile for user: {}", user_id);
        ApiError::ProfileNotFound
    })
}

/// GET /api/profile
///
/// Answers the current user's profile, or `{}` if they have none yet.
pub async fn current_profile(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
) -> Result<Response, ApiError> {
    let pool = require_pool(pool)?;

    match db::get_profile_by_user(&pool, user.user_id).await? {
        Some(profile) => Ok(Json(profile).into_response()),
        None => Ok(Json(json!({})).into_response()),
    }
}

/// GET /api/profile/handle/{handle}
pub async fn profile_by_handle(
    State(pool): State<Option<SqlitePool>>,
    Path(handle): Path<String>,
) -> Result<Json<Option<Profile>>, ApiError> {
    let pool = require_pool(pool)?;
    Ok(Json(db::get_profile_by_handle(&pool, &handle).await?))
}

/// GET /api/profile/user/{user_id}
///
/// A malformed ID cannot match any profile and answers `null` as well.
pub async fn profile_by_user(
    State(pool): State<Option<SqlitePool>>,
    Path(user_id): Path<String>,
) -> Result<Json<Option<Profile>>, ApiError> {
    let pool = require_pool(pool)?;

    let Ok(user_id) = Uuid::parse_str(&user_id) else {
        return Ok(Json(None));
    };

    Ok(Json(db::get_profile_by_user(&pool, user_id).await?))
}

/// GET /api/profile/all
pub async fn all_profiles(
    State(pool): State<Option<SqlitePool>>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    let pool = require_pool(pool)?;
    Ok(Json(db::list_profiles(&pool).await?))
}

/// POST /api/profile
///
/// Creates the profile on first call and overwrites its fields afterwards.
pub async fn upsert_profile(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    request.check()?;
    let pool = require_pool(pool)?;

    if let Some(owner) = db::get_handle_owner(&pool, &request.handle).await? {
        if owner != user.user_id {
            tracing::warn!("Handle already taken: {}", request.handle);
            return Err(ApiError::field("handle", HANDLE_TAKEN));
        }
    }

    db::upsert_profile(&pool, user.user_id, &request)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::field("handle", HANDLE_TAKEN)
            } else {
                tracing::error!("Failed to save profile: {:?}", e);
                ApiError::Persistence(e)
            }
        })?;

    tracing::info!("Profile saved for user {} ({})", user.user_id, request.handle);

    reload_profile(&pool, user.user_id).await
}

/// POST /api/profile/education
pub async fn add_education(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    Json(request): Json<EducationRequest>,
) -> Result<Json<Profile>, ApiError> {
    let dates = request.check()?;
    let pool = require_pool(pool)?;

    let profile_id = require_profile_id(&pool, user.user_id).await?;
    db::add_education(&pool, profile_id, &request, dates).await?;

    reload_profile(&pool, user.user_id).await
}

/// POST /api/profile/experience
pub async fn add_experience(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    Json(request): Json<ExperienceRequest>,
) -> Result<Json<Profile>, ApiError> {
    let dates = request.check()?;
    let pool = require_pool(pool)?;

    let profile_id = require_profile_id(&pool, user.user_id).await?;
    db::add_experience(&pool, profile_id, &request, dates).await?;

    reload_profile(&pool, user.user_id).await
}

/// DELETE /api/profile/education/{id}
pub async fn delete_education(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    Path(entry_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let pool = require_pool(pool)?;
    let profile_id = require_profile_id(&pool, user.user_id).await?;

    let removed = match Uuid::parse_str(&entry_id) {
        Ok(entry_id) => db::delete_education(&pool, profile_id, entry_id).await?,
        Err(_) => false,
    };
    if !removed {
        tracing::warn!("Education entry not found: {}", entry_id);
        return Err(ApiError::EntryNotFound { collection: "education" });
    }

    reload_profile(&pool, user.user_id).await
}

/// DELETE /api/profile/experience/{id}
pub async fn delete_experience(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    Path(entry_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let pool = require_pool(pool)?;
    let profile_id = require_profile_id(&pool, user.user_id).await?;

    let removed = match Uuid::parse_str(&entry_id) {
        Ok(entry_id) => db::delete_experience(&pool, profile_id, entry_id).await?,
        Err(_) => false,
    };
    if !removed {
        tracing::warn!("Experience entry not found: {}", entry_id);
        return Err(ApiError::EntryNotFound { collection: "experience" });
    }

    reload_profile(&pool, user.user_id).await
}

/// DELETE /api/profile
///
/// Removes the profile and the user in one transaction.
pub async fn delete_account(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
) -> Result<Json<DeleteAccountResponse>, ApiError> {
    let pool = require_pool(pool)?;

    delete_user_account(&pool, user.user_id).await.map_err(|e| {
        tracing::error!("Failed to delete account {}: {:?}", user.user_id, e);
        ApiError::Persistence(e)
    })?;

    tracing::info!("Account deleted: {}", user.user_id);

    Ok(Json(DeleteAccountResponse { success: true }))
}
