use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    dto::beat_sheets::UpdateBeatSheetRequest, error::AppError, models::beat_sheets::BeatSheet,
};

/// Inserts the empty beat sheet belonging to a freshly created project.
/// Runs inside the project-creation transaction so a project can never be
/// observed without its sheet.
pub async fn insert_empty(
    tx: &mut Transaction<'_, Postgres>,
    project_id: Uuid,
    title: &str,
) -> Result<BeatSheet, AppError> {
    let sheet = sqlx::query_as::<_, BeatSheet>(
        r#"
            INSERT INTO story.beat_sheet (
                project_id, title, date, logline, genre,
                opening_image, theme_stated, set_up, catalyst, debate,
                break_into_two, b_story, fun_and_games, midpoint,
                bad_guys_close_in, all_is_lost, dark_night_of_the_soul,
                break_into_three, finale, final_image
            )
            VALUES (
                $1, $2, NOW(), '', '',
                '', '', '', '', '',
                '', '', '', '',
                '', '', '',
                '', '', ''
            )
            RETURNING *
        "#,
    )
    .bind(project_id)
    .bind(title)
    .fetch_one(&mut **tx)
    .await?;

    Ok(sheet)
}

pub async fn find_for_owner(
    pool: &PgPool,
    project_id: Uuid,
    owner_id: Uuid,
) -> Result<Option<BeatSheet>, AppError> {
    let sheet = crate::log_query_fetch_optional!(
        "beat_sheets.find_for_owner",
        sqlx::query_as::<_, BeatSheet>(
            r#"
                SELECT bs.*
                FROM story.beat_sheet bs
                JOIN story.project p ON p.id = bs.project_id
                WHERE bs.project_id = $1
                  AND p.owner_id = $2
            "#,
        )
        .bind(project_id)
        .bind(owner_id)
        .fetch_optional(pool)
    )?;

    Ok(sheet)
}

/// Updates the mutable fields only; title and date are server-managed.
/// The owner check rides in the same statement.
pub async fn update_fields_for_owner(
    pool: &PgPool,
    project_id: Uuid,
    owner_id: Uuid,
    req: &UpdateBeatSheetRequest,
) -> Result<Option<BeatSheet>, AppError> {
    let sheet = crate::log_query_fetch_optional!(
        "beat_sheets.update_fields",
        sqlx::query_as::<_, BeatSheet>(
            r#"
                UPDATE story.beat_sheet bs
                SET logline = $3,
                    genre = $4,
                    opening_image = $5,
                    theme_stated = $6,
                    set_up = $7,
                    catalyst = $8,
                    debate = $9,
                    break_into_two = $10,
                    b_story = $11,
                    fun_and_games = $12,
                    midpoint = $13,
                    bad_guys_close_in = $14,
                    all_is_lost = $15,
                    dark_night_of_the_soul = $16,
                    break_into_three = $17,
                    finale = $18,
                    final_image = $19,
                    updated_at = NOW()
                FROM story.project p
                WHERE bs.project_id = p.id
                  AND bs.project_id = $1
                  AND p.owner_id = $2
                RETURNING bs.*
            "#,
        )
        .bind(project_id)
        .bind(owner_id)
        .bind(&req.logline)
        .bind(&req.genre)
        .bind(&req.opening_image)
        .bind(&req.theme_stated)
        .bind(&req.set_up)
        .bind(&req.catalyst)
        .bind(&req.debate)
        .bind(&req.break_into_two)
        .bind(&req.b_story)
        .bind(&req.fun_and_games)
        .bind(&req.midpoint)
        .bind(&req.bad_guys_close_in)
        .bind(&req.all_is_lost)
        .bind(&req.dark_night_of_the_soul)
        .bind(&req.break_into_three)
        .bind(&req.finale)
        .bind(&req.final_image)
        .fetch_optional(pool)
    )?;

    Ok(sheet)
}

/// Keeps the sheet title in sync when its project is renamed. Runs inside
/// the rename transaction.
pub async fn update_title(
    tx: &mut Transaction<'_, Postgres>,
    project_id: Uuid,
    title: &str,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
            UPDATE story.beat_sheet
            SET title = $2, updated_at = NOW()
            WHERE project_id = $1
        "#,
    )
    .bind(project_id)
    .bind(title)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
