/**
 * API Route Handlers
 *
 * This module wires the `/api/users` and `/api/profile` handlers.
 *
 * # Authentication
 *
 * Routes acting on the caller's own account sit behind
 * `auth_middleware`, applied with `route_layer` so unknown paths still
 * reach the 404 fallback instead of answering 401.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{current_user, login, register, users_test};
use crate::backend::middleware::auth_middleware;
use crate::backend::profile::{
    add_education, add_experience, all_profiles, current_profile, delete_account,
    delete_education, delete_experience, profile_by_handle, profile_by_user, upsert_profile,
};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
///
/// # Returns
///
/// Router with public and protected API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/users/test", get(users_test))
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        .route("/api/profile/handle/{handle}", get(profile_by_handle))
        .route("/api/profile/user/{user_id}", get(profile_by_user))
        .route("/api/profile/all", get(all_profiles));

    let protected = Router::new()
        .route("/api/users/current", get(current_user))
        .route(
            "/api/profile",
            get(current_profile).post(upsert_profile).delete(delete_account),
        )
        .route("/api/profile/education", post(add_education))
        .route("/api/profile/education/{id}", delete(delete_education))
        .route("/api/profile/experience", post(add_experience))
        .route("/api/profile/experience/{id}", delete(delete_experience))
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router.merge(public).merge(protected)
}
