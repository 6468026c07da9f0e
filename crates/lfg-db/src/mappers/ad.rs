//! Ad entity <-> model mapper
//!
//! The storage codecs run here: hours are decoded from minute offsets and
//! week days are split from their joined column.

use lfg_core::entities::Ad;
use lfg_core::error::DomainError;
use lfg_core::value_objects::{AdId, ClockTime, GameId, WeekDays};
use uuid::Uuid;

use crate::models::AdModel;

/// Convert AdModel to Ad entity
///
/// Fails if a stored hour lies outside one day or the week day column
/// holds a non-integer element.
impl TryFrom<AdModel> for Ad {
    type Error = DomainError;

    fn try_from(model: AdModel) -> Result<Self, Self::Error> {
        Ok(Ad {
            id: AdId::from_uuid(model.id),
            game_id: GameId::from_uuid(model.game_id),
            name: model.name,
            week_days: WeekDays::from_stored(&model.week_days)?,
            use_voice_channel: model.use_voice_channel,
            years_playing: model.years_playing,
            hour_start: ClockTime::try_from(model.hour_start)?,
            hour_end: ClockTime::try_from(model.hour_end)?,
            discord: model.discord,
            created_at: model.created_at,
        })
    }
}

/// Ad entity reference flattened to column values for insertion
pub struct AdInsert<'a> {
    pub id: Uuid,
    pub game_id: Uuid,
    pub name: &'a str,
    pub years_playing: i32,
    pub discord: &'a str,
    pub week_days: String,
    pub hour_start: i32,
    pub hour_end: i32,
    pub use_voice_channel: bool,
}

impl<'a> AdInsert<'a> {
    pub fn new(ad: &'a Ad) -> Self {
        Self {
            id: ad.id.into_inner(),
            game_id: ad.game_id.into_inner(),
            name: &ad.name,
            years_playing: ad.years_playing,
            discord: &ad.discord,
            week_days: ad.week_days.to_stored(),
            hour_start: ad.hour_start.into(),
            hour_end: ad.hour_end.into(),
            use_voice_channel: ad.use_voice_channel,
        }
    }
}
