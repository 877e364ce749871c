use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::{
    app::state::AppState,
    auth::middleware::AuthUser,
    dto::beat_sheets::{BeatSheetResponse, UpdateBeatSheetRequest},
    error::AppError,
    usecases::beat_sheets::BeatSheetService,
};

pub async fn get_beat_sheet_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(project_id): Path<uuid::Uuid>,
) -> Result<Json<BeatSheetResponse>, AppError> {
    let sheet = BeatSheetService::get(&state.db, auth_user.user_id, project_id)
        .await?
        .ok_or(AppError::NotFound("Not found".to_string()))?;
    Ok(Json(sheet))
}

pub async fn update_beat_sheet_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(project_id): Path<uuid::Uuid>,
    Json(req): Json<UpdateBeatSheetRequest>,
) -> Result<axum::http::StatusCode, AppError> {
    BeatSheetService::update(&state.db, auth_user.user_id, project_id, req).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}
