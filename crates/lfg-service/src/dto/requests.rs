//! Request DTOs for API endpoints
//!
//! Field names follow the public JSON contract (camelCase).

use lfg_core::value_objects::ClockTime;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Post a new ad for a game
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    pub name: String,

    /// Weekday codes the player is available on
    pub week_days: Vec<i32>,

    pub use_voice_channel: bool,

    #[validate(range(min = 0, message = "yearsPlaying must not be negative"))]
    pub years_playing: i32,

    /// `HH:MM`
    #[validate(custom(function = "validate_clock_time"))]
    pub hour_start: String,

    /// `HH:MM`
    #[validate(custom(function = "validate_clock_time"))]
    pub hour_end: String,

    pub discord: String,
}

fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    ClockTime::parse(value).map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("clock_time");
        err.message = Some(e.to_string().into());
        err
    })
}
