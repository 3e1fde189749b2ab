use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::extractor::AuthUser, error::ApiError, state::AppState};

use super::dto::{ListParams, UserResponse, UserUpdate};
use super::repo::User;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[instrument(skip(state, _auth))]
async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = User::list(&state.db, params.skip, params.limit).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[instrument(skip(state, _auth))]
async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, _auth, payload))]
async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = User::update(
        &state.db,
        id,
        payload.email.as_deref(),
        payload.username.as_deref(),
        payload.full_name.as_deref(),
        payload.is_active,
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    info!(user_id = id, "user updated");
    Ok(Json(user.into()))
}

#[instrument(skip(state, _auth))]
async fn delete_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !User::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("User not found".into()));
    }
    info!(user_id = id, "user deleted");
    Ok(Json(
        serde_json::json!({ "message": "User deleted successfully" }),
    ))
}
