//! Ad service
//!
//! Handles posting ads, listing them per game, and revealing contact handles.

use lfg_core::entities::{Ad, NewAd};
use lfg_core::error::DomainError;
use lfg_core::value_objects::{AdId, ClockTime, GameId, WeekDays};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{AdCreatedResponse, AdResponse, CreateAdRequest, DiscordResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Ad service
pub struct AdService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdService<'a> {
    /// Create a new AdService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a new ad for a game
    ///
    /// Hours arrive as `HH:MM` and are stored as minutes since midnight.
    #[instrument(skip(self, request))]
    pub async fn create_ad(
        &self,
        game_id: GameId,
        request: CreateAdRequest,
    ) -> ServiceResult<AdCreatedResponse> {
        request.validate()?;

        let hour_start = ClockTime::parse(&request.hour_start)
            .map_err(|e| ServiceError::validation(format!("hourStart: {e}")))?;
        let hour_end = ClockTime::parse(&request.hour_end)
            .map_err(|e| ServiceError::validation(format!("hourEnd: {e}")))?;

        let ad = Ad::new(
            AdId::generate(),
            NewAd {
                game_id,
                name: request.name,
                week_days: WeekDays::new(request.week_days),
                use_voice_channel: request.use_voice_channel,
                years_playing: request.years_playing,
                hour_start,
                hour_end,
                discord: request.discord,
            },
        );

        self.ctx.ad_repo().create(&ad).await?;

        info!(ad_id = %ad.id, game_id = %game_id, "Ad created");

        Ok(AdCreatedResponse::from(&ad))
    }

    /// List the ads of a game, newest first
    #[instrument(skip(self))]
    pub async fn list_ads(&self, game_id: GameId) -> ServiceResult<Vec<AdResponse>> {
        let ads = self.ctx.ad_repo().find_by_game(game_id).await?;
        Ok(ads.iter().map(AdResponse::from).collect())
    }

    /// Reveal the contact handle of an ad
    #[instrument(skip(self))]
    pub async fn get_discord(&self, ad_id: AdId) -> ServiceResult<DiscordResponse> {
        let discord = self
            .ctx
            .ad_repo()
            .find_discord(ad_id)
            .await?
            .ok_or(DomainError::AdNotFound(ad_id))?;

        Ok(DiscordResponse { discord })
    }
}
