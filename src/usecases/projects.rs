use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    dto::projects::{CreateProjectRequest, ProjectResponse, RenameProjectRequest},
    error::AppError,
    repositories::beat_sheets as beat_sheet_repo,
    repositories::projects as project_repo,
    telemetry::BusinessEvent,
};

pub struct ProjectService;

impl ProjectService {
    pub async fn list(pool: &PgPool, owner_id: Uuid) -> Result<Vec<ProjectResponse>, AppError> {
        let projects = project_repo::list_projects_for_owner(pool, owner_id).await?;
        Ok(projects.into_iter().map(ProjectResponse::from).collect())
    }

    /// Creates the project together with its empty beat sheet in one
    /// transaction; a project must never exist without its sheet.
    pub async fn create(
        pool: &PgPool,
        owner_id: Uuid,
        req: CreateProjectRequest,
    ) -> Result<ProjectResponse, AppError> {
        let name = normalize_project_name(&req.name)?;

        let mut tx = pool.begin().await?;
        let project = project_repo::insert_project(&mut tx, owner_id, &name).await?;
        beat_sheet_repo::insert_empty(&mut tx, project.id, &project.name).await?;
        tx.commit().await?;

        BusinessEvent::ProjectCreated {
            project_id: project.id,
            user_id: owner_id,
        }
        .log();

        Ok(ProjectResponse::from(project))
    }

    /// Renames the project and rewrites the beat sheet title in the same
    /// transaction. Silent no-op when the project is not owned.
    pub async fn rename(
        pool: &PgPool,
        owner_id: Uuid,
        project_id: Uuid,
        req: RenameProjectRequest,
    ) -> Result<(), AppError> {
        let name = normalize_project_name(&req.name)?;

        let mut tx = pool.begin().await?;
        let Some(project) = project_repo::rename_project(&mut tx, project_id, owner_id, &name).await?
        else {
            return Ok(());
        };
        beat_sheet_repo::update_title(&mut tx, project.id, &project.name).await?;
        tx.commit().await?;

        BusinessEvent::ProjectRenamed {
            project_id,
            user_id: owner_id,
        }
        .log();
        Ok(())
    }

    /// Idempotent: deleting an absent or not-owned project is a no-op.
    pub async fn delete(pool: &PgPool, owner_id: Uuid, project_id: Uuid) -> Result<(), AppError> {
        let deleted = project_repo::delete_project_cascade(pool, project_id, owner_id).await?;
        if deleted {
            BusinessEvent::ProjectDeleted {
                project_id,
                user_id: owner_id,
            }
            .log();
        }
        Ok(())
    }
}

fn normalize_project_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            "Project name is required".to_string(),
        ));
    }
    if trimmed.chars().count() > 100 {
        return Err(AppError::ValidationError(
            "Project name must not exceed 100 characters".to_string(),
        ));
    }
    Ok(trimmed.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::normalize_project_name;

    #[test]
    fn project_name_is_trimmed_and_uppercased() {
        assert_eq!(normalize_project_name("  heist  ").unwrap(), "HEIST");
    }

    #[test]
    fn project_name_rejects_empty() {
        assert!(normalize_project_name("   ").is_err());
    }

    #[test]
    fn project_name_rejects_over_100_chars() {
        let long = "a".repeat(101);
        assert!(normalize_project_name(&long).is_err());
        let ok = "a".repeat(100);
        assert!(normalize_project_name(&ok).is_ok());
    }
}
