//! # lfg-service
//!
//! Application layer containing the use cases, DTOs, and the dependency
//! container handed to request handlers.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use dto::{
    AdCountResponse, AdCreatedResponse, AdResponse, CreateAdRequest, DiscordResponse,
    GameResponse, HealthChecks, HealthResponse, ReadinessResponse,
};
pub use services::{
    AdService, GameService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
