//! User resource endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, UserIdPath, ValidatedJson};
use crate::domain::{User, UserPayload};

/// Routes for the user resource, relative to the `/api` prefix
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    debug!("Listing all users");

    let users = state.users.find_all().await?;

    Ok(Json(users))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Response, ApiError> {
    debug!(user_id = %id, "Getting user");

    match state.users.find_by_id(&id).await? {
        Some(user) => Ok(Json(user).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    debug!(name = %payload.name, "Creating user");

    let saved = state.users.save(User::from(payload)).await?;

    if let Some(id) = saved.id() {
        info!(user_id = %id, "User created");
    }

    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /api/users/{id}
///
/// Never upserts: an unknown id answers 404 and nothing is written.
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<Response, ApiError> {
    debug!(user_id = %id, "Updating user");

    let Some(mut existing) = state.users.find_by_id(&id).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    existing.apply(&payload);
    let updated = state.users.save(existing).await?;

    Ok(Json(updated).into_response())
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = %id, "Deleting user");

    if !state.users.exists_by_id(&id).await? {
        return Ok(StatusCode::NOT_FOUND);
    }

    state.users.delete_by_id(&id).await?;
    info!(user_id = %id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
