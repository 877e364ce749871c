use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::{
    app::state::AppState,
    auth::middleware::AuthUser,
    dto::projects::{CreateProjectRequest, ProjectResponse, RenameProjectRequest},
    error::AppError,
    usecases::projects::ProjectService,
};

pub async fn list_projects_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = ProjectService::list(&state.db, auth_user.user_id).await?;
    Ok(Json(projects))
}

pub async fn create_project_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(axum::http::StatusCode, Json<ProjectResponse>), AppError> {
    let project = ProjectService::create(&state.db, auth_user.user_id, req).await?;
    Ok((axum::http::StatusCode::CREATED, Json(project)))
}

pub async fn rename_project_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(project_id): Path<uuid::Uuid>,
    Json(req): Json<RenameProjectRequest>,
) -> Result<axum::http::StatusCode, AppError> {
    ProjectService::rename(&state.db, auth_user.user_id, project_id, req).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub async fn delete_project_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(project_id): Path<uuid::Uuid>,
) -> Result<axum::http::StatusCode, AppError> {
    ProjectService::delete(&state.db, auth_user.user_id, project_id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}
