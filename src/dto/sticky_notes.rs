use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::sticky_notes::{EmotionalCharge, StickyNote};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStickyNoteRequest {
    pub x: f64,
    pub y: f64,
    pub scene_heading: String,
    pub description: String,
    pub emotional_charge: EmotionalCharge,
    pub emotional_description: String,
    pub conflict: String,
    pub color: Option<String>,
    pub beat_item: Option<String>,
}

/// Full-replace update; `beat_item` omitted or empty unpins the note.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStickyNoteRequest {
    pub x: f64,
    pub y: f64,
    pub scene_heading: String,
    pub description: String,
    pub emotional_charge: EmotionalCharge,
    pub emotional_description: String,
    pub conflict: String,
    pub color: String,
    pub beat_item: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNotePositionRequest {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNoteColorRequest {
    pub color: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StickyNoteResponse {
    pub id: Uuid,
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

impl From<StickyNote> for StickyNoteResponse {
    fn from(note: StickyNote) -> Self {
        Self {
            id: note.id,
            project_id: note.project_id,
            x: note.x,
            y: note.y,
            scene_heading: note.scene_heading,
            description: note.description,
            emotional_charge: note.emotional_charge,
            emotional_description: note.emotional_description,
            conflict: note.conflict,
            color: note.color,
            beat_item: note.beat_item,
        }
    }
}
