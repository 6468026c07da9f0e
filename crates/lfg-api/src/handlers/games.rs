//! Game handlers

use axum::{extract::State, Json};
use lfg_service::{GameResponse, GameService};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List every game with its ad count
///
/// GET /games
pub async fn list_games(State(state): State<AppState>) -> ApiResult<Json<Vec<GameResponse>>> {
    let service = GameService::new(state.service_context());
    let games = service.list_games().await.map_err(ApiError::internal)?;
    Ok(Json(games))
}
