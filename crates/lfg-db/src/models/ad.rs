//! Ad database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for ads table
///
/// `week_days` is the comma-joined storage form; `hour_start`/`hour_end`
/// are minutes since midnight.
#[derive(Debug, Clone, FromRow)]
pub struct AdModel {
    pub id: Uuid,
    pub game_id: Uuid,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: String,
    pub hour_start: i32,
    pub hour_end: i32,
    pub use_voice_channel: bool,
    pub created_at: DateTime<Utc>,
}
