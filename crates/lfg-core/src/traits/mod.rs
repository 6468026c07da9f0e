//! Repository traits

mod repositories;

pub use repositories::{AdRepository, GameRepository, RepoResult};
