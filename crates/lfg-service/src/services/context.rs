//! Service context - dependency container for services
//!
//! Holds the connection pool and the repositories needed by services.

use std::sync::Arc;

use lfg_core::traits::{AdRepository, GameRepository};
use lfg_db::PgPool;

/// Service context containing all dependencies
///
/// Cloning is cheap: the pool and repositories are reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    game_repo: Arc<dyn GameRepository>,
    ad_repo: Arc<dyn AdRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        game_repo: Arc<dyn GameRepository>,
        ad_repo: Arc<dyn AdRepository>,
    ) -> Self {
        Self {
            pool,
            game_repo,
            ad_repo,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the game repository
    pub fn game_repo(&self) -> &dyn GameRepository {
        self.game_repo.as_ref()
    }

    /// Get the ad repository
    pub fn ad_repo(&self) -> &dyn AdRepository {
        self.ad_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    game_repo: Option<Arc<dyn GameRepository>>,
    ad_repo: Option<Arc<dyn AdRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn game_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.game_repo = Some(repo);
        self
    }

    pub fn ad_repo(mut self, repo: Arc<dyn AdRepository>) -> Self {
        self.ad_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns an error if any dependency was not provided
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::internal("pool is required"))?,
            self.game_repo
                .ok_or_else(|| ServiceError::internal("game_repo is required"))?,
            self.ad_repo
                .ok_or_else(|| ServiceError::internal("ad_repo is required"))?,
        ))
    }
}
