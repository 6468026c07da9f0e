//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Ad, GameWithAdCount};
use crate::error::DomainError;
use crate::value_objects::{AdId, GameId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Game Repository
// ============================================================================

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// List all games, each annotated with its ad count
    async fn list_with_ad_counts(&self) -> RepoResult<Vec<GameWithAdCount>>;
}

// ============================================================================
// Ad Repository
// ============================================================================

#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Persist a new ad
    ///
    /// Returns `DomainError::GameNotFound` if `ad.game_id` does not reference
    /// an existing game.
    async fn create(&self, ad: &Ad) -> RepoResult<()>;

    /// List ads of a game, newest first
    ///
    /// Ads created at the same instant are ordered by id, descending.
    async fn find_by_game(&self, game_id: GameId) -> RepoResult<Vec<Ad>>;

    /// Get the contact handle of an ad
    async fn find_discord(&self, id: AdId) -> RepoResult<Option<String>>;
}
