//! Game entity <-> model mapper

use lfg_core::entities::{Game, GameWithAdCount};
use lfg_core::value_objects::GameId;

use crate::models::GameWithAdCountModel;

/// Convert a listing row to a game with its ad count
impl From<GameWithAdCountModel> for GameWithAdCount {
    fn from(model: GameWithAdCountModel) -> Self {
        GameWithAdCount {
            game: Game {
                id: GameId::from_uuid(model.id),
                title: model.title,
            },
            ad_count: model.ad_count,
        }
    }
}
