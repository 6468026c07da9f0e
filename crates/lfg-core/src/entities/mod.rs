//! Domain entities - core business objects

mod ad;
mod game;

pub use ad::{Ad, NewAd};
pub use game::{Game, GameWithAdCount};
