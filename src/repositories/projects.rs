use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{error::AppError, models::projects::Project};

pub async fn list_projects_for_owner(
    pool: &PgPool,
    owner_id: Uuid,
) -> Result<Vec<Project>, AppError> {
    let projects = crate::log_query_fetch_all!(
        "projects.list_for_owner",
        sqlx::query_as::<_, Project>(
            r#"
                SELECT *
                FROM story.project
                WHERE owner_id = $1
                ORDER BY name ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
    )?;

    Ok(projects)
}

/// Ownership predicate used before inserting or listing children.
pub async fn is_owned(pool: &PgPool, project_id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
    let owned = crate::log_query_fetch_one!(
        "projects.is_owned",
        sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS(
                    SELECT 1 FROM story.project WHERE id = $1 AND owner_id = $2
                )
            "#,
        )
        .bind(project_id)
        .bind(owner_id)
        .fetch_one(pool)
    )?;

    Ok(owned)
}

pub async fn insert_project(
    tx: &mut Transaction<'_, Postgres>,
    owner_id: Uuid,
    name: &str,
) -> Result<Project, AppError> {
    let project = sqlx::query_as::<_, Project>(
        r#"
            INSERT INTO story.project (owner_id, name)
            VALUES ($1, $2)
            RETURNING *
        "#,
    )
    .bind(owner_id)
    .bind(name)
    .fetch_one(&mut **tx)
    .await?;

    Ok(project)
}

pub async fn rename_project(
    tx: &mut Transaction<'_, Postgres>,
    project_id: Uuid,
    owner_id: Uuid,
    name: &str,
) -> Result<Option<Project>, AppError> {
    let project = sqlx::query_as::<_, Project>(
        r#"
            UPDATE story.project
            SET name = $3, updated_at = NOW()
            WHERE id = $1 AND owner_id = $2
            RETURNING *
        "#,
    )
    .bind(project_id)
    .bind(owner_id)
    .bind(name)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(project)
}

/// Deletes a project and its whole subtree in one transaction. Returns
/// false when the project is absent or owned by someone else, which the
/// caller treats as a silent no-op.
pub async fn delete_project_cascade(
    pool: &PgPool,
    project_id: Uuid,
    owner_id: Uuid,
) -> Result<bool, AppError> {
    let mut tx = pool.begin().await?;

    let owned = sqlx::query_scalar::<_, Uuid>(
        r#"
            SELECT id FROM story.project
            WHERE id = $1 AND owner_id = $2
            FOR UPDATE
        "#,
    )
    .bind(project_id)
    .bind(owner_id)
    .fetch_optional(&mut *tx)
    .await?;

    if owned.is_none() {
        return Ok(false);
    }

    // Children before parent: sticky notes, characters, locations, the
    // beat sheet, then the project row.
    for table in [
        "story.sticky_note",
        "story.character",
        "story.location",
        "story.beat_sheet",
    ] {
        let statement = format!("DELETE FROM {table} WHERE project_id = $1");
        sqlx::query(&statement)
            .bind(project_id)
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query("DELETE FROM story.project WHERE id = $1")
        .bind(project_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(true)
}
