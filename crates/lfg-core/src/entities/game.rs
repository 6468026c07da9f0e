//! Game entity - a title that ads are grouped under

use crate::value_objects::GameId;

/// Game entity
///
/// Games are seeded outside this service; nothing here creates or edits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub title: String,
}

impl Game {
    pub fn new(id: GameId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Game annotated with the number of ads posted for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameWithAdCount {
    pub game: Game,
    pub ad_count: i64,
}
