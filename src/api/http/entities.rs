use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::{
    app::state::AppState,
    auth::middleware::AuthUser,
    dto::entities::{CreateNamedEntityRequest, NamedEntityResponse, RenameNamedEntityRequest},
    error::AppError,
    models::entities::NamedEntityKind,
    usecases::entities::EntityService,
};

pub async fn list_characters_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(project_id): Path<uuid::Uuid>,
) -> Result<Json<Vec<NamedEntityResponse>>, AppError> {
    let characters = EntityService::list(
        &state.db,
        NamedEntityKind::Character,
        auth_user.user_id,
        project_id,
    )
    .await?;
    Ok(Json(characters))
}

pub async fn create_character_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(project_id): Path<uuid::Uuid>,
    Json(req): Json<CreateNamedEntityRequest>,
) -> Result<(axum::http::StatusCode, Json<NamedEntityResponse>), AppError> {
    let character = EntityService::create(
        &state.db,
        NamedEntityKind::Character,
        auth_user.user_id,
        project_id,
        req,
    )
    .await?
    .ok_or(AppError::NotFound("Not found".to_string()))?;
    Ok((axum::http::StatusCode::CREATED, Json(character)))
}

pub async fn rename_character_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path((_project_id, character_id)): Path<(uuid::Uuid, uuid::Uuid)>,
    Json(req): Json<RenameNamedEntityRequest>,
) -> Result<axum::http::StatusCode, AppError> {
    EntityService::rename(
        &state.db,
        NamedEntityKind::Character,
        auth_user.user_id,
        character_id,
        req,
    )
    .await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub async fn delete_character_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path((_project_id, character_id)): Path<(uuid::Uuid, uuid::Uuid)>,
) -> Result<axum::http::StatusCode, AppError> {
    EntityService::delete(
        &state.db,
        NamedEntityKind::Character,
        auth_user.user_id,
        character_id,
    )
    .await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub async fn list_locations_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(project_id): Path<uuid::Uuid>,
) -> Result<Json<Vec<NamedEntityResponse>>, AppError> {
    let locations = EntityService::list(
        &state.db,
        NamedEntityKind::Location,
        auth_user.user_id,
        project_id,
    )
    .await?;
    Ok(Json(locations))
}

pub async fn create_location_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(project_id): Path<uuid::Uuid>,
    Json(req): Json<CreateNamedEntityRequest>,
) -> Result<(axum::http::StatusCode, Json<NamedEntityResponse>), AppError> {
    let location = EntityService::create(
        &state.db,
        NamedEntityKind::Location,
        auth_user.user_id,
        project_id,
        req,
    )
    .await?
    .ok_or(AppError::NotFound("Not found".to_string()))?;
    Ok((axum::http::StatusCode::CREATED, Json(location)))
}

pub async fn rename_location_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path((_project_id, location_id)): Path<(uuid::Uuid, uuid::Uuid)>,
    Json(req): Json<RenameNamedEntityRequest>,
) -> Result<axum::http::StatusCode, AppError> {
    EntityService::rename(
        &state.db,
        NamedEntityKind::Location,
        auth_user.user_id,
        location_id,
        req,
    )
    .await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub async fn delete_location_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path((_project_id, location_id)): Path<(uuid::Uuid, uuid::Uuid)>,
) -> Result<axum::http::StatusCode, AppError> {
    EntityService::delete(
        &state.db,
        NamedEntityKind::Location,
        auth_user.user_id,
        location_id,
    )
    .await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}
