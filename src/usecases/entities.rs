use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    dto::entities::{CreateNamedEntityRequest, NamedEntityResponse, RenameNamedEntityRequest},
    error::AppError,
    models::entities::NamedEntityKind,
    repositories::entities as entity_repo,
    repositories::projects as project_repo,
};

/// One service covers characters and locations; they only differ by table.
pub struct EntityService;

impl EntityService {
    /// Empty list when the project is absent or not owned.
    pub async fn list(
        pool: &PgPool,
        kind: NamedEntityKind,
        owner_id: Uuid,
        project_id: Uuid,
    ) -> Result<Vec<NamedEntityResponse>, AppError> {
        if !project_repo::is_owned(pool, project_id, owner_id).await? {
            return Ok(Vec::new());
        }

        let entities = entity_repo::list_for_project(pool, kind, project_id).await?;
        Ok(entities.into_iter().map(NamedEntityResponse::from).collect())
    }

    /// None when the project is absent or not owned.
    pub async fn create(
        pool: &PgPool,
        kind: NamedEntityKind,
        owner_id: Uuid,
        project_id: Uuid,
        req: CreateNamedEntityRequest,
    ) -> Result<Option<NamedEntityResponse>, AppError> {
        let name = normalize_name(&req.name, kind)?;
        if !project_repo::is_owned(pool, project_id, owner_id).await? {
            return Ok(None);
        }

        let entity = entity_repo::insert(pool, kind, project_id, &name).await?;
        Ok(Some(NamedEntityResponse::from(entity)))
    }

    /// Silent no-op when the entity is absent or not reachable from this
    /// owner.
    pub async fn rename(
        pool: &PgPool,
        kind: NamedEntityKind,
        owner_id: Uuid,
        entity_id: Uuid,
        req: RenameNamedEntityRequest,
    ) -> Result<(), AppError> {
        let name = normalize_name(&req.name, kind)?;
        entity_repo::rename_for_owner(pool, kind, entity_id, owner_id, &name).await?;
        Ok(())
    }

    /// Idempotent delete.
    pub async fn delete(
        pool: &PgPool,
        kind: NamedEntityKind,
        owner_id: Uuid,
        entity_id: Uuid,
    ) -> Result<(), AppError> {
        entity_repo::delete_for_owner(pool, kind, entity_id, owner_id).await?;
        Ok(())
    }
}

/// Names are stored trimmed and upper-cased.
fn normalize_name(name: &str, kind: NamedEntityKind) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "A {} name is required",
            kind.label()
        )));
    }
    if trimmed.chars().count() > 100 {
        return Err(AppError::ValidationError(format!(
            "A {} name must not exceed 100 characters",
            kind.label()
        )));
    }
    Ok(trimmed.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::normalize_name;
    use crate::models::entities::NamedEntityKind;

    #[test]
    fn name_is_trimmed_and_uppercased() {
        let name = normalize_name("  alice  ", NamedEntityKind::Character).unwrap();
        assert_eq!(name, "ALICE");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(normalize_name("   ", NamedEntityKind::Location).is_err());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let long = "x".repeat(101);
        assert!(normalize_name(&long, NamedEntityKind::Character).is_err());
    }

    #[test]
    fn unicode_names_are_uppercased() {
        let name = normalize_name("café del mar", NamedEntityKind::Location).unwrap();
        assert_eq!(name, "CAFÉ DEL MAR");
    }
}
