//! Axum extractors for request handling

mod validated;

pub use validated::{BodyRejection, ValidatedJson};
