//! Ad entity - a "looking for group" post attached to one game

use chrono::{DateTime, SubsecRound, Utc};

use crate::value_objects::{AdId, ClockTime, GameId, WeekDays};

/// Ad entity
///
/// Ads are immutable once posted. The `discord` handle is the only contact
/// detail and is kept out of listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ad {
    pub id: AdId,
    pub game_id: GameId,
    pub name: String,
    pub week_days: WeekDays,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: ClockTime,
    pub hour_end: ClockTime,
    pub discord: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the poster, before an id and timestamp are assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAd {
    pub game_id: GameId,
    pub name: String,
    pub week_days: WeekDays,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: ClockTime,
    pub hour_end: ClockTime,
    pub discord: String,
}

impl Ad {
    /// Create a new Ad stamped with the current time
    ///
    /// The timestamp is cut to microseconds, the precision `TIMESTAMPTZ`
    /// keeps, so the record handed back matches the one read later.
    pub fn new(id: AdId, new: NewAd) -> Self {
        Self::with_created_at(id, new, Utc::now().trunc_subsecs(6))
    }

    pub fn with_created_at(id: AdId, new: NewAd, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            game_id: new.game_id,
            name: new.name,
            week_days: new.week_days,
            use_voice_channel: new.use_voice_channel,
            years_playing: new.years_playing,
            hour_start: new.hour_start,
            hour_end: new.hour_end,
            discord: new.discord,
            created_at,
        }
    }
}
