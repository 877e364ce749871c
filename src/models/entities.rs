use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// Characters and locations are structurally identical: an id, a project
/// and an upper-cased name. One row type serves both tables.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct NamedEntity {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedEntityKind {
    Character,
    Location,
}

impl NamedEntityKind {
    /// Table names are static so they can be spliced into SQL directly;
    /// everything else is bound as a parameter.
    pub fn table(self) -> &'static str {
        match self {
            NamedEntityKind::Character => "story.character",
            NamedEntityKind::Location => "story.location",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NamedEntityKind::Character => "character",
            NamedEntityKind::Location => "location",
        }
    }
}
