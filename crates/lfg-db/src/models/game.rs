//! Game database model

use sqlx::FromRow;
use uuid::Uuid;

/// Row of the games listing query (games joined with their ad count)
#[derive(Debug, Clone, FromRow)]
pub struct GameWithAdCountModel {
    pub id: Uuid,
    pub title: String,
    pub ad_count: i64,
}
