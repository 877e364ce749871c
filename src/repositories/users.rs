use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{error::AppError, models::users::User};

pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, AppError> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM core.user WHERE LOWER(email) = LOWER($1))
    "#,
    )
    .bind(email)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool, AppError> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM core.user WHERE LOWER(username) = LOWER($1))
    "#,
    )
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

pub async fn insert_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    username: &str,
) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
            INSERT INTO core.user(email, password_hash, username)
            VALUES ($1, $2, $3)
            RETURNING *
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
            SELECT * FROM core.user WHERE LOWER(email) = LOWER($1)
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_user_by_email_or_username(
    pool: &PgPool,
    identifier: &str,
) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
            SELECT * FROM core.user
            WHERE LOWER(email) = LOWER($1) OR LOWER(username) = LOWER($1)
        "#,
    )
    .bind(identifier)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(pool: &PgPool, user_id: Uuid) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
            SELECT * FROM core.user WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn mark_email_verified(pool: &PgPool, user_id: Uuid) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
            UPDATE core.user
            SET email_verified_at = CURRENT_TIMESTAMP,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING *
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn update_password_hash(
    pool: &PgPool,
    user_id: Uuid,
    password_hash: &str,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
            UPDATE core.user
            SET password_hash = $2,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn set_verification_sent_at(
    pool: &PgPool,
    user_id: Uuid,
    sent_at: DateTime<Utc>,
) -> Result<(), AppError> {
    let sent_at = sent_at.to_rfc3339();
    sqlx::query(
        r#"
            UPDATE core.user
            SET
                metadata = jsonb_set(
                    COALESCE(metadata, '{}'::jsonb),
                    '{verification_sent_at}',
                    to_jsonb($2::text),
                    true
                ),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(sent_at)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn set_reset_token(
    pool: &PgPool,
    user_id: Uuid,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), AppError> {
    let expires_at = expires_at.to_rfc3339();
    sqlx::query(
        r#"
            UPDATE core.user
            SET
                metadata = jsonb_set(
                    jsonb_set(
                        COALESCE(metadata, '{}'::jsonb),
                        '{reset_token_hash}',
                        to_jsonb($2::text),
                        true
                    ),
                    '{reset_token_expires_at}',
                    to_jsonb($3::text),
                    true
                ),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(token_hash)
    .bind(expires_at)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn clear_reset_token(pool: &PgPool, user_id: Uuid) -> Result<(), AppError> {
    sqlx::query(
        r#"
            UPDATE core.user
            SET
                metadata = (COALESCE(metadata, '{}'::jsonb)
                    - 'reset_token_hash') - 'reset_token_expires_at',
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Deletes a user and everything they own in one transaction. Children go
/// first so the invariant never depends on schema-level cascade rules:
/// notes/characters/locations, then beat sheets, then projects, then the
/// user row itself.
pub async fn delete_user_cascade(pool: &PgPool, user_id: Uuid) -> Result<(), AppError> {
    let mut tx: Transaction<'_, Postgres> = pool.begin().await?;

    for table in [
        "story.sticky_note",
        "story.character",
        "story.location",
        "story.beat_sheet",
    ] {
        let statement = format!(
            r#"
                DELETE FROM {table}
                WHERE project_id IN (SELECT id FROM story.project WHERE owner_id = $1)
            "#
        );
        sqlx::query(&statement).bind(user_id).execute(&mut *tx).await?;
    }

    sqlx::query("DELETE FROM story.project WHERE owner_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM core.user WHERE id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
