//! Database models - SQLx-compatible structs for PostgreSQL tables

mod ad;
mod game;

pub use ad::AdModel;
pub use game::GameWithAdCountModel;
