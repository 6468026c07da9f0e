//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use lfg_core::entities::{Ad, GameWithAdCount};

use super::responses::{AdCountResponse, AdCreatedResponse, AdResponse, GameResponse};

impl From<&GameWithAdCount> for GameResponse {
    fn from(entry: &GameWithAdCount) -> Self {
        Self {
            id: entry.game.id.to_string(),
            title: entry.game.title.clone(),
            count: AdCountResponse {
                ads: entry.ad_count,
            },
        }
    }
}

impl From<GameWithAdCount> for GameResponse {
    fn from(entry: GameWithAdCount) -> Self {
        Self::from(&entry)
    }
}

impl From<&Ad> for AdResponse {
    fn from(ad: &Ad) -> Self {
        Self {
            id: ad.id.to_string(),
            name: ad.name.clone(),
            week_days: ad.week_days.as_slice().to_vec(),
            use_voice_channel: ad.use_voice_channel,
            years_playing: ad.years_playing,
            hour_start: ad.hour_start.to_string(),
            hour_end: ad.hour_end.to_string(),
        }
    }
}

impl From<Ad> for AdResponse {
    fn from(ad: Ad) -> Self {
        Self::from(&ad)
    }
}

impl From<&Ad> for AdCreatedResponse {
    fn from(ad: &Ad) -> Self {
        Self {
            id: ad.id.to_string(),
            game_id: ad.game_id.to_string(),
            name: ad.name.clone(),
            week_days: ad.week_days.as_slice().to_vec(),
            use_voice_channel: ad.use_voice_channel,
            years_playing: ad.years_playing,
            hour_start: ad.hour_start.to_string(),
            hour_end: ad.hour_end.to_string(),
            discord: ad.discord.clone(),
            created_at: ad.created_at,
        }
    }
}
