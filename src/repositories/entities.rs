use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::entities::{NamedEntity, NamedEntityKind},
};

pub async fn list_for_project(
    pool: &PgPool,
    kind: NamedEntityKind,
    project_id: Uuid,
) -> Result<Vec<NamedEntity>, AppError> {
    let statement = format!(
        r#"
            SELECT id, project_id, name
            FROM {table}
            WHERE project_id = $1
            ORDER BY name ASC
        "#,
        table = kind.table()
    );

    let entities = sqlx::query_as::<_, NamedEntity>(&statement)
        .bind(project_id)
        .fetch_all(pool)
        .await?;

    Ok(entities)
}

pub async fn insert(
    pool: &PgPool,
    kind: NamedEntityKind,
    project_id: Uuid,
    name: &str,
) -> Result<NamedEntity, AppError> {
    let statement = format!(
        r#"
            INSERT INTO {table} (project_id, name)
            VALUES ($1, $2)
            RETURNING id, project_id, name
        "#,
        table = kind.table()
    );

    let entity = sqlx::query_as::<_, NamedEntity>(&statement)
        .bind(project_id)
        .bind(name)
        .fetch_one(pool)
        .await?;

    Ok(entity)
}

/// Rename scoped through the owning project in a single statement; None
/// when the entity is absent or not reachable from this owner.
pub async fn rename_for_owner(
    pool: &PgPool,
    kind: NamedEntityKind,
    entity_id: Uuid,
    owner_id: Uuid,
    name: &str,
) -> Result<Option<NamedEntity>, AppError> {
    let statement = format!(
        r#"
            UPDATE {table} e
            SET name = $3
            FROM story.project p
            WHERE e.project_id = p.id
              AND e.id = $1
              AND p.owner_id = $2
            RETURNING e.id, e.project_id, e.name
        "#,
        table = kind.table()
    );

    let entity = sqlx::query_as::<_, NamedEntity>(&statement)
        .bind(entity_id)
        .bind(owner_id)
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(entity)
}

pub async fn delete_for_owner(
    pool: &PgPool,
    kind: NamedEntityKind,
    entity_id: Uuid,
    owner_id: Uuid,
) -> Result<u64, AppError> {
    let statement = format!(
        r#"
            DELETE FROM {table} e
            USING story.project p
            WHERE e.project_id = p.id
              AND e.id = $1
              AND p.owner_id = $2
        "#,
        table = kind.table()
    );

    let result = sqlx::query(&statement)
        .bind(entity_id)
        .bind(owner_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
