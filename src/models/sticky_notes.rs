use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// The emotional polarity shift of a scene, start/end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "story.emotional_charge")]
pub enum EmotionalCharge {
    #[serde(rename = "+/+")]
    #[sqlx(rename = "+/+")]
    PlusPlus,
    #[serde(rename = "-/-")]
    #[sqlx(rename = "-/-")]
    MinusMinus,
    #[serde(rename = "+/-")]
    #[sqlx(rename = "+/-")]
    PlusMinus,
    #[serde(rename = "-/+")]
    #[sqlx(rename = "-/+")]
    MinusPlus,
}

/// A corkboard scene card. `beat_item` is empty when the note is not
/// pinned to a beat; when set it drives the stored color.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StickyNote {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::EmotionalCharge;

    #[test]
    fn emotional_charge_serializes_to_symbols() {
        let json = serde_json::to_string(&EmotionalCharge::PlusMinus).unwrap();
        assert_eq!(json, "\"+/-\"");
    }

    #[test]
    fn emotional_charge_roundtrips_all_values() {
        for symbol in ["+/+", "-/-", "+/-", "-/+"] {
            let value: EmotionalCharge =
                serde_json::from_str(&format!("\"{}\"", symbol)).unwrap();
            assert_eq!(serde_json::to_string(&value).unwrap(), format!("\"{}\"", symbol));
        }
    }

    #[test]
    fn emotional_charge_rejects_unknown_symbol() {
        assert!(serde_json::from_str::<EmotionalCharge>("\"+/?\"").is_err());
    }
}
