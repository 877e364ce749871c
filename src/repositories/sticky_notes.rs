use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::sticky_notes::{EmotionalCharge, StickyNote},
};

pub struct CreateNoteParams {
    pub project_id: Uuid,
    pub x: f64,
    pub y: f64,
    pub scene_heading: String,
    pub description: String,
    pub emotional_charge: EmotionalCharge,
    pub emotional_description: String,
    pub conflict: String,
    pub color: String,
    pub beat_item: String,
}

pub struct UpdateNoteParams {
    pub x: f64,
    pub y: f64,
    pub scene_heading: String,
    pub description: String,
    pub emotional_charge: EmotionalCharge,
    pub emotional_description: String,
    pub conflict: String,
    pub color: String,
    pub beat_item: String,
}

pub async fn list_for_project(
    pool: &PgPool,
    project_id: Uuid,
) -> Result<Vec<StickyNote>, AppError> {
    let notes = crate::log_query_fetch_all!(
        "sticky_notes.list_for_project",
        sqlx::query_as::<_, StickyNote>(
            r#"
                SELECT *
                FROM story.sticky_note
                WHERE project_id = $1
            "#,
        )
        .bind(project_id)
        .fetch_all(pool)
    )?;

    Ok(notes)
}

pub async fn insert(pool: &PgPool, params: CreateNoteParams) -> Result<StickyNote, AppError> {
    let note = crate::log_query_fetch_one!(
        "sticky_notes.insert",
        sqlx::query_as::<_, StickyNote>(
            r#"
                INSERT INTO story.sticky_note (
                    project_id, x, y, scene_heading, description,
                    emotional_charge, emotional_description, conflict,
                    color, beat_item
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING *
            "#,
        )
        .bind(params.project_id)
        .bind(params.x)
        .bind(params.y)
        .bind(&params.scene_heading)
        .bind(&params.description)
        .bind(params.emotional_charge)
        .bind(&params.emotional_description)
        .bind(&params.conflict)
        .bind(&params.color)
        .bind(&params.beat_item)
        .fetch_one(pool)
    )?;

    Ok(note)
}

/// Full replace, owner-checked in the same statement. None when the note
/// is absent or belongs to another user's project.
pub async fn update_full_for_owner(
    pool: &PgPool,
    note_id: Uuid,
    owner_id: Uuid,
    params: UpdateNoteParams,
) -> Result<Option<StickyNote>, AppError> {
    let note = crate::log_query_fetch_optional!(
        "sticky_notes.update_full",
        sqlx::query_as::<_, StickyNote>(
            r#"
                UPDATE story.sticky_note n
                SET x = $3,
                    y = $4,
                    scene_heading = $5,
                    description = $6,
                    emotional_charge = $7,
                    emotional_description = $8,
                    conflict = $9,
                    color = $10,
                    beat_item = $11,
                    updated_at = NOW()
                FROM story.project p
                WHERE n.project_id = p.id
                  AND n.id = $1
                  AND p.owner_id = $2
                RETURNING n.*
            "#,
        )
        .bind(note_id)
        .bind(owner_id)
        .bind(params.x)
        .bind(params.y)
        .bind(&params.scene_heading)
        .bind(&params.description)
        .bind(params.emotional_charge)
        .bind(&params.emotional_description)
        .bind(&params.conflict)
        .bind(&params.color)
        .bind(&params.beat_item)
        .fetch_optional(pool)
    )?;

    Ok(note)
}

/// Narrow update for the drag path.
pub async fn update_position_for_owner(
    pool: &PgPool,
    note_id: Uuid,
    owner_id: Uuid,
    x: f64,
    y: f64,
) -> Result<u64, AppError> {
    let result = crate::log_query_execute!(
        "sticky_notes.update_position",
        sqlx::query(
            r#"
                UPDATE story.sticky_note n
                SET x = $3, y = $4, updated_at = NOW()
                FROM story.project p
                WHERE n.project_id = p.id
                  AND n.id = $1
                  AND p.owner_id = $2
            "#,
        )
        .bind(note_id)
        .bind(owner_id)
        .bind(x)
        .bind(y)
        .execute(pool)
    )?;

    Ok(result.rows_affected())
}

pub async fn update_color_for_owner(
    pool: &PgPool,
    note_id: Uuid,
    owner_id: Uuid,
    color: &str,
) -> Result<u64, AppError> {
    let result = crate::log_query_execute!(
        "sticky_notes.update_color",
        sqlx::query(
            r#"
                UPDATE story.sticky_note n
                SET color = $3, updated_at = NOW()
                FROM story.project p
                WHERE n.project_id = p.id
                  AND n.id = $1
                  AND p.owner_id = $2
            "#,
        )
        .bind(note_id)
        .bind(owner_id)
        .bind(color)
        .execute(pool)
    )?;

    Ok(result.rows_affected())
}

pub async fn delete_for_owner(
    pool: &PgPool,
    note_id: Uuid,
    owner_id: Uuid,
) -> Result<u64, AppError> {
    let result = crate::log_query_execute!(
        "sticky_notes.delete",
        sqlx::query(
            r#"
                DELETE FROM story.sticky_note n
                USING story.project p
                WHERE n.project_id = p.id
                  AND n.id = $1
                  AND p.owner_id = $2
            "#,
        )
        .bind(note_id)
        .bind(owner_id)
        .execute(pool)
    )?;

    Ok(result.rows_affected())
}
