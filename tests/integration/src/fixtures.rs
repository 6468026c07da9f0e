//! Test fixtures and data generators
//!
//! Request and response bodies mirroring the public JSON contract.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Unique game title so parallel tests don't collide
pub fn unique_title(base: &str) -> String {
    format!("{base} {}", unique_suffix())
}

/// Body of `POST /games/:id/ads`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    pub name: String,
    pub week_days: Vec<i32>,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: String,
    pub hour_end: String,
    pub discord: String,
}

impl CreateAdRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("player{suffix}"),
            week_days: vec![0, 2, 4],
            use_voice_channel: true,
            years_playing: 3,
            hour_start: "18:00".to_string(),
            hour_end: "23:30".to_string(),
            discord: format!("player{suffix}#0001"),
        }
    }

    pub fn with_hours(mut self, start: &str, end: &str) -> Self {
        self.hour_start = start.to_string();
        self.hour_end = end.to_string();
        self
    }
}

/// Game as listed by `GET /games`
#[derive(Debug, Deserialize)]
pub struct GameResponse {
    pub id: String,
    pub title: String,
    #[serde(rename = "_count")]
    pub count: AdCount,
}

#[derive(Debug, Deserialize)]
pub struct AdCount {
    pub ads: i64,
}

/// Ad as returned right after creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdCreatedResponse {
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub week_days: Vec<i32>,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: String,
    pub hour_end: String,
    pub discord: String,
    pub created_at: String,
}

/// Discord lookup response
#[derive(Debug, Deserialize)]
pub struct DiscordResponse {
    pub discord: String,
}

/// Error body shared by every failing route
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
