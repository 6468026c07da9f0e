//! Ad handlers
//!
//! Every failure on these routes collapses into a single fixed message per
//! route; the underlying cause is only logged.

use axum::{
    extract::{Path, State},
    Json,
};
use lfg_core::value_objects::{AdId, GameId};
use lfg_service::{AdCreatedResponse, AdResponse, AdService, CreateAdRequest, DiscordResponse};

use crate::extractors::{BodyRejection, ValidatedJson};
use crate::response::{service_cause, ApiError, ApiResult, Created};
use crate::state::AppState;

/// Post a new ad for a game
///
/// POST /games/{id}/ads
pub async fn create_ad(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    body: Result<ValidatedJson<CreateAdRequest>, BodyRejection>,
) -> ApiResult<Created<Json<AdCreatedResponse>>> {
    let game_id: GameId = game_id.parse().map_err(ApiError::invalid_ad_data)?;
    let ValidatedJson(request) = body.map_err(ApiError::invalid_ad_data)?;

    let service = AdService::new(state.service_context());
    let response = service
        .create_ad(game_id, request)
        .await
        .map_err(|e| ApiError::invalid_ad_data(service_cause(&e)))?;
    Ok(Created(Json(response)))
}

/// List the ads of a game, newest first
///
/// GET /games/{id}/ads
pub async fn list_game_ads(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> ApiResult<Json<Vec<AdResponse>>> {
    let game_id: GameId = game_id.parse().map_err(ApiError::invalid_game)?;

    let service = AdService::new(state.service_context());
    let ads = service
        .list_ads(game_id)
        .await
        .map_err(|e| ApiError::invalid_game(service_cause(&e)))?;
    Ok(Json(ads))
}

/// Reveal the contact handle of an ad
///
/// GET /ads/{id}/discord
pub async fn get_ad_discord(
    State(state): State<AppState>,
    Path(ad_id): Path<String>,
) -> ApiResult<Json<DiscordResponse>> {
    let ad_id: AdId = ad_id.parse().map_err(ApiError::invalid_ad)?;

    let service = AdService::new(state.service_context());
    let response = service
        .get_discord(ad_id)
        .await
        .map_err(|e| ApiError::invalid_ad(service_cause(&e)))?;
    Ok(Json(response))
}
