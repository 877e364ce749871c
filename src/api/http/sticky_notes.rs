use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::{
    app::state::AppState,
    auth::middleware::AuthUser,
    dto::sticky_notes::{
        CreateStickyNoteRequest, StickyNoteResponse, UpdateNoteColorRequest,
        UpdateNotePositionRequest, UpdateStickyNoteRequest,
    },
    error::AppError,
    usecases::sticky_notes::NoteService,
};

pub async fn list_notes_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(project_id): Path<uuid::Uuid>,
) -> Result<Json<Vec<StickyNoteResponse>>, AppError> {
    let notes = NoteService::list(&state.db, auth_user.user_id, project_id).await?;
    Ok(Json(notes))
}

pub async fn create_note_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(project_id): Path<uuid::Uuid>,
    Json(req): Json<CreateStickyNoteRequest>,
) -> Result<(axum::http::StatusCode, Json<StickyNoteResponse>), AppError> {
    let note = NoteService::create(&state.db, auth_user.user_id, project_id, req)
        .await?
        .ok_or(AppError::NotFound("Not found".to_string()))?;
    Ok((axum::http::StatusCode::CREATED, Json(note)))
}

pub async fn update_note_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path((_project_id, note_id)): Path<(uuid::Uuid, uuid::Uuid)>,
    Json(req): Json<UpdateStickyNoteRequest>,
) -> Result<Json<StickyNoteResponse>, AppError> {
    let note = NoteService::update_full(&state.db, auth_user.user_id, note_id, req)
        .await?
        .ok_or(AppError::NotFound("Not found".to_string()))?;
    Ok(Json(note))
}

pub async fn update_note_position_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path((_project_id, note_id)): Path<(uuid::Uuid, uuid::Uuid)>,
    Json(req): Json<UpdateNotePositionRequest>,
) -> Result<axum::http::StatusCode, AppError> {
    NoteService::update_position(&state.db, auth_user.user_id, note_id, req).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub async fn update_note_color_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path((_project_id, note_id)): Path<(uuid::Uuid, uuid::Uuid)>,
    Json(req): Json<UpdateNoteColorRequest>,
) -> Result<axum::http::StatusCode, AppError> {
    NoteService::update_color(&state.db, auth_user.user_id, note_id, req).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub async fn delete_note_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path((_project_id, note_id)): Path<(uuid::Uuid, uuid::Uuid)>,
) -> Result<axum::http::StatusCode, AppError> {
    NoteService::delete(&state.db, auth_user.user_id, note_id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}
