use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    dto::beat_sheets::{BeatSheetResponse, UpdateBeatSheetRequest},
    error::AppError,
    repositories::beat_sheets as beat_sheet_repo,
};

pub struct BeatSheetService;

impl BeatSheetService {
    /// None when the project is absent or owned by someone else; the
    /// caller does not get to tell the difference.
    pub async fn get(
        pool: &PgPool,
        owner_id: Uuid,
        project_id: Uuid,
    ) -> Result<Option<BeatSheetResponse>, AppError> {
        let sheet = beat_sheet_repo::find_for_owner(pool, project_id, owner_id).await?;
        Ok(sheet.map(BeatSheetResponse::from))
    }

    /// Updates logline, genre and the fifteen beats. Title and date stay
    /// server-managed. Silent no-op when not owned.
    pub async fn update(
        pool: &PgPool,
        owner_id: Uuid,
        project_id: Uuid,
        req: UpdateBeatSheetRequest,
    ) -> Result<(), AppError> {
        beat_sheet_repo::update_fields_for_owner(pool, project_id, owner_id, &req).await?;
        Ok(())
    }
}
