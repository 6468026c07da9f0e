//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Hours are
//! rendered as `HH:MM` and week days as integer arrays.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Game Responses
// ============================================================================

/// Game with its ad count, as listed by `GET /games`
#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    pub id: String,
    pub title: String,
    #[serde(rename = "_count")]
    pub count: AdCountResponse,
}

/// Relation counts attached to a game
#[derive(Debug, Clone, Serialize)]
pub struct AdCountResponse {
    pub ads: i64,
}

// ============================================================================
// Ad Responses
// ============================================================================

/// Ad as listed for a game; never carries the contact handle
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdResponse {
    pub id: String,
    pub name: String,
    pub week_days: Vec<i32>,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: String,
    pub hour_end: String,
}

/// Freshly created ad, returned once to the poster
#[derive(Debug, Clone, Serialize)]
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
    pub created_at: DateTime<Utc>,
}

/// Contact handle of a single ad
#[derive(Debug, Clone, Serialize)]
pub struct DiscordResponse {
    pub discord: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
