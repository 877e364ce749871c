use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// The fixed-schema "Save the Cat" beat sheet. `title` mirrors the project
/// name and `date` is stamped at creation; both are server-managed. All
/// text fields are non-null and default to the empty string.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BeatSheet {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub date: DateTime<Utc>,
    pub logline: String,
    pub genre: String,
    pub opening_image: String,
    pub theme_stated: String,
    pub set_up: String,
    pub catalyst: String,
    pub debate: String,
    pub break_into_two: String,
    pub b_story: String,
    pub fun_and_games: String,
    pub midpoint: String,
    pub bad_guys_close_in: String,
    pub all_is_lost: String,
    pub dark_night_of_the_soul: String,
    pub break_into_three: String,
    pub finale: String,
    pub final_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
