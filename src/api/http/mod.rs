pub mod auth;
pub mod beat_sheets;
pub mod entities;
pub mod projects;
pub mod sticky_notes;
