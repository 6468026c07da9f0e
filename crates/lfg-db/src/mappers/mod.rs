//! Entity to model mappers
//!
//! Conversions between domain entities (lfg-core) and database models.
//! - `From<Model>`/`TryFrom<Model>` for entities: database rows to domain objects
//! - `*Insert` structs: entity data prepared for database writes

mod ad;
mod game;

pub use ad::AdInsert;
