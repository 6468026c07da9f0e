//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{ads, games, health, home};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::help))
        .merge(game_routes())
        .merge(ad_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Game routes
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(games::list_games))
        .route(
            "/games/:id/ads",
            get(ads::list_game_ads).post(ads::create_ad),
        )
}

/// Ad routes
fn ad_routes() -> Router<AppState> {
    Router::new().route("/ads/:id/discord", get(ads::get_ad_discord))
}
