//! PostgreSQL implementation of GameRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lfg_core::entities::GameWithAdCount;
use lfg_core::traits::{GameRepository, RepoResult};

use crate::models::GameWithAdCountModel;

use super::error::map_db_error;

/// PostgreSQL implementation of GameRepository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Create a new PgGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    #[instrument(skip(self))]
    async fn list_with_ad_counts(&self) -> RepoResult<Vec<GameWithAdCount>> {
        let results = sqlx::query_as::<_, GameWithAdCountModel>(
            r"
            SELECT g.id, g.title, COUNT(a.id) AS ad_count
            FROM games g
            LEFT JOIN ads a ON a.game_id = g.id
            GROUP BY g.id, g.title
            ORDER BY g.title ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GameWithAdCount::from).collect())
    }
}
