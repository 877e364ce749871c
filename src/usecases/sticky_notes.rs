use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    dto::sticky_notes::{
        CreateStickyNoteRequest, StickyNoteResponse, UpdateNoteColorRequest,
        UpdateNotePositionRequest, UpdateStickyNoteRequest,
    },
    error::AppError,
    models::beats::{DEFAULT_NOTE_COLOR, color_for_beat},
    repositories::projects as project_repo,
    repositories::sticky_notes as note_repo,
    repositories::sticky_notes::{CreateNoteParams, UpdateNoteParams},
};

pub struct NoteService;

impl NoteService {
    /// Empty list when the project is absent or not owned.
    pub async fn list(
        pool: &PgPool,
        owner_id: Uuid,
        project_id: Uuid,
    ) -> Result<Vec<StickyNoteResponse>, AppError> {
        if !project_repo::is_owned(pool, project_id, owner_id).await? {
            return Ok(Vec::new());
        }

        let notes = note_repo::list_for_project(pool, project_id).await?;
        Ok(notes.into_iter().map(StickyNoteResponse::from).collect())
    }

    /// None when the project is absent or not owned.
    pub async fn create(
        pool: &PgPool,
        owner_id: Uuid,
        project_id: Uuid,
        req: CreateStickyNoteRequest,
    ) -> Result<Option<StickyNoteResponse>, AppError> {
        validate_position(req.x, req.y)?;
        if !project_repo::is_owned(pool, project_id, owner_id).await? {
            return Ok(None);
        }

        let beat_item = normalize_beat_item(req.beat_item.as_deref());
        let color = resolve_note_color(&beat_item, req.color.as_deref());

        let note = note_repo::insert(
            pool,
            CreateNoteParams {
                project_id,
                x: req.x,
                y: req.y,
                scene_heading: req.scene_heading,
                description: req.description,
                emotional_charge: req.emotional_charge,
                emotional_description: req.emotional_description,
                conflict: req.conflict,
                color,
                beat_item,
            },
        )
        .await?;

        Ok(Some(StickyNoteResponse::from(note)))
    }

    /// Full replace. The stored color is recomputed from `beat_item`:
    /// a pinned note always wears its beat's color.
    pub async fn update_full(
        pool: &PgPool,
        owner_id: Uuid,
        note_id: Uuid,
        req: UpdateStickyNoteRequest,
    ) -> Result<Option<StickyNoteResponse>, AppError> {
        validate_position(req.x, req.y)?;
        validate_color(&req.color)?;

        let beat_item = normalize_beat_item(req.beat_item.as_deref());
        let color = resolve_note_color(&beat_item, Some(&req.color));

        let note = note_repo::update_full_for_owner(
            pool,
            note_id,
            owner_id,
            UpdateNoteParams {
                x: req.x,
                y: req.y,
                scene_heading: req.scene_heading,
                description: req.description,
                emotional_charge: req.emotional_charge,
                emotional_description: req.emotional_description,
                conflict: req.conflict,
                color,
                beat_item,
            },
        )
        .await?;

        Ok(note.map(StickyNoteResponse::from))
    }

    /// High-frequency drag path; silent no-op when not owned.
    pub async fn update_position(
        pool: &PgPool,
        owner_id: Uuid,
        note_id: Uuid,
        req: UpdateNotePositionRequest,
    ) -> Result<(), AppError> {
        validate_position(req.x, req.y)?;
        note_repo::update_position_for_owner(pool, note_id, owner_id, req.x, req.y).await?;
        Ok(())
    }

    /// Manual palette choice for unpinned notes; silent no-op when not
    /// owned.
    pub async fn update_color(
        pool: &PgPool,
        owner_id: Uuid,
        note_id: Uuid,
        req: UpdateNoteColorRequest,
    ) -> Result<(), AppError> {
        validate_color(&req.color)?;
        note_repo::update_color_for_owner(pool, note_id, owner_id, req.color.trim()).await?;
        Ok(())
    }

    /// Idempotent delete.
    pub async fn delete(pool: &PgPool, owner_id: Uuid, note_id: Uuid) -> Result<(), AppError> {
        note_repo::delete_for_owner(pool, note_id, owner_id).await?;
        Ok(())
    }
}

fn normalize_beat_item(beat_item: Option<&str>) -> String {
    beat_item.map(str::trim).unwrap_or_default().to_string()
}

/// A non-empty `beat_item` always decides the color (unknown keys fall
/// back to the default); otherwise the requested color is kept, or the
/// default when blank.
fn resolve_note_color(beat_item: &str, requested: Option<&str>) -> String {
    if !beat_item.is_empty() {
        return color_for_beat(beat_item).to_string();
    }
    match requested.map(str::trim) {
        Some(color) if !color.is_empty() => color.to_string(),
        _ => DEFAULT_NOTE_COLOR.to_string(),
    }
}

fn validate_position(x: f64, y: f64) -> Result<(), AppError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(AppError::ValidationError(
            "Note position must be finite numbers".to_string(),
        ));
    }
    Ok(())
}

fn validate_color(color: &str) -> Result<(), AppError> {
    if color.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Note color is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::beats::DEFAULT_NOTE_COLOR;

    #[test]
    fn pinned_note_wears_its_beat_color() {
        assert_eq!(resolve_note_color("catalyst", Some("#123456")), "#CE93D8");
        assert_eq!(
            resolve_note_color("catalyst", None),
            resolve_note_color("catalyst", Some("#abcdef"))
        );
    }

    #[test]
    fn unknown_beat_key_falls_back_to_default() {
        assert_eq!(resolve_note_color("notABeat", Some("#123456")), DEFAULT_NOTE_COLOR);
    }

    #[test]
    fn unpinned_note_keeps_requested_color() {
        assert_eq!(resolve_note_color("", Some("#123456")), "#123456");
    }

    #[test]
    fn unpinned_note_without_color_gets_default() {
        assert_eq!(resolve_note_color("", None), DEFAULT_NOTE_COLOR);
        assert_eq!(resolve_note_color("", Some("   ")), DEFAULT_NOTE_COLOR);
    }

    #[test]
    fn beat_item_is_trimmed() {
        assert_eq!(normalize_beat_item(Some("  catalyst ")), "catalyst");
        assert_eq!(normalize_beat_item(None), "");
    }

    #[test]
    fn validate_position_rejects_non_finite() {
        assert!(validate_position(f64::NAN, 0.0).is_err());
        assert!(validate_position(0.0, f64::INFINITY).is_err());
        assert!(validate_position(100.0, 200.0).is_ok());
    }

    #[test]
    fn validate_color_rejects_blank() {
        assert!(validate_color("").is_err());
        assert!(validate_color("  ").is_err());
        assert!(validate_color("#fff59d").is_ok());
    }
}
