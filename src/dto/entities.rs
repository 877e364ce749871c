use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::entities::NamedEntity;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNamedEntityRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameNamedEntityRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedEntityResponse {
    pub id: Uuid,
    pub name: String,
    pub project_id: Uuid,
}

impl From<NamedEntity> for NamedEntityResponse {
    fn from(entity: NamedEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            project_id: entity.project_id,
        }
    }
}
