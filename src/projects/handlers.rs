use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::extractor::AuthUser, error::ApiError, state::AppState, users::dto::ListParams};

use super::dto::{ProjectCreate, ProjectResponse, ProjectUpdate};
use super::repo::Project;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

#[instrument(skip(state, _auth))]
async fn list_projects(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = Project::list(&state.db, params.skip, params.limit).await?;
    Ok(Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

#[instrument(skip(state, _auth, payload))]
async fn create_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(payload): Json<ProjectCreate>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = Project::create(
        &state.db,
        &payload.name,
        payload.description.as_deref(),
        payload.status,
        payload.priority,
        payload.owner_id,
    )
    .await?;
    info!(project_id = project.id, name = %project.name, "project created");
    Ok(Json(project.into()))
}

#[instrument(skip(state, _auth))]
async fn get_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = Project::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".into()))?;
    Ok(Json(project.into()))
}

#[instrument(skip(state, _auth, payload))]
async fn update_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<ProjectUpdate>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = Project::update(
        &state.db,
        id,
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.status,
        payload.priority,
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Project not found".into()))?;
    info!(project_id = id, "project updated");
    Ok(Json(project.into()))
}

#[instrument(skip(state, _auth))]
async fn delete_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !Project::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Project not found".into()));
    }
    info!(project_id = id, "project deleted");
    Ok(Json(
        serde_json::json!({ "message": "Project deleted successfully" }),
    ))
}
