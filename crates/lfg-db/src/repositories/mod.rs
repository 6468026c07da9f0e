//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in lfg-core.

mod ad;
mod error;
mod game;

pub use ad::PgAdRepository;
pub use game::PgGameRepository;
