//! PostgreSQL implementation of AdRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lfg_core::entities::Ad;
use lfg_core::error::DomainError;
use lfg_core::traits::{AdRepository, RepoResult};
use lfg_core::value_objects::{AdId, GameId};

use crate::mappers::AdInsert;
use crate::models::AdModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of AdRepository
#[derive(Clone)]
pub struct PgAdRepository {
    pool: PgPool,
}

impl PgAdRepository {
    /// Create a new PgAdRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdRepository for PgAdRepository {
    #[instrument(skip(self, ad), fields(ad_id = %ad.id, game_id = %ad.game_id))]
    async fn create(&self, ad: &Ad) -> RepoResult<()> {
        let insert = AdInsert::new(ad);

        sqlx::query(
            r"
            INSERT INTO ads (
                id, game_id, name, years_playing, discord, week_days,
                hour_start, hour_end, use_voice_channel, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(insert.id)
        .bind(insert.game_id)
        .bind(insert.name)
        .bind(insert.years_playing)
        .bind(insert.discord)
        .bind(&insert.week_days)
        .bind(insert.hour_start)
        .bind(insert.hour_end)
        .bind(insert.use_voice_channel)
        .bind(ad.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::GameNotFound(ad.game_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_game(&self, game_id: GameId) -> RepoResult<Vec<Ad>> {
        let results = sqlx::query_as::<_, AdModel>(
            r"
            SELECT id, game_id, name, years_playing, discord, week_days,
                   hour_start, hour_end, use_voice_channel, created_at
            FROM ads
            WHERE game_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(game_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Ad::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_discord(&self, id: AdId) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT discord FROM ads WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
