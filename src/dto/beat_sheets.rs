use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::beat_sheets::BeatSheet;

/// Full beat sheet as rendered by the editor. `title` and `date` are
/// included in responses but never accepted back on update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeatSheetResponse {
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
}

/// Full-replace update of the mutable fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBeatSheetRequest {
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
}

impl From<BeatSheet> for BeatSheetResponse {
    fn from(sheet: BeatSheet) -> Self {
        Self {
            id: sheet.id,
            project_id: sheet.project_id,
            title: sheet.title,
            date: sheet.date,
            logline: sheet.logline,
            genre: sheet.genre,
            opening_image: sheet.opening_image,
            theme_stated: sheet.theme_stated,
            set_up: sheet.set_up,
            catalyst: sheet.catalyst,
            debate: sheet.debate,
            break_into_two: sheet.break_into_two,
            b_story: sheet.b_story,
            fun_and_games: sheet.fun_and_games,
            midpoint: sheet.midpoint,
            bad_guys_close_in: sheet.bad_guys_close_in,
            all_is_lost: sheet.all_is_lost,
            dark_night_of_the_soul: sheet.dark_night_of_the_soul,
            break_into_three: sheet.break_into_three,
            finale: sheet.finale,
            final_image: sheet.final_image,
        }
    }
}
