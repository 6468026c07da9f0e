//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use lfg_core::value_objects::{AdId, GameId};
use reqwest::StatusCode;
use serde_json::Value;

fn error(message: &str) -> ErrorResponse {
    ErrorResponse {
        error: message.to_string(),
    }
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_help_page() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = response.text().await.unwrap();
    assert!(html.contains("/games"));
}

// ============================================================================
// Game Tests
// ============================================================================

#[tokio::test]
async fn test_list_games_counts_ads() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let title = unique_title("Valorant");
    let game_id = server.seed_game(&title).await.unwrap();

    for _ in 0..2 {
        let response = server
            .post(&format!("/games/{game_id}/ads"), &CreateAdRequest::unique())
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/games").await.unwrap();
    let games: Vec<GameResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let game = games
        .iter()
        .find(|g| g.id == game_id.to_string())
        .expect("seeded game is listed");
    assert_eq!(game.title, title);
    assert_eq!(game.count.ads, 2);
}

// ============================================================================
// Ad Tests
// ============================================================================

#[tokio::test]
async fn test_create_ad() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let game_id = server.seed_game(&unique_title("Apex")).await.unwrap();
    let request = CreateAdRequest::unique().with_hours("8:00", "23:59");

    let response = server
        .post(&format!("/games/{game_id}/ads"), &request)
        .await
        .unwrap();
    let ad: AdCreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(ad.game_id, game_id.to_string());
    assert_eq!(ad.name, request.name);
    assert_eq!(ad.week_days, vec![0, 2, 4]);
    assert!(ad.use_voice_channel);
    assert_eq!(ad.years_playing, 3);
    assert_eq!(ad.hour_start, "08:00");
    assert_eq!(ad.hour_end, "23:59");
    assert_eq!(ad.discord, request.discord);
    assert!(!ad.created_at.is_empty());
    assert!(AdId::parse(&ad.id).is_ok());
}

#[tokio::test]
async fn test_list_ads_round_trips_and_hides_discord() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let game_id = server.seed_game(&unique_title("Dota 2")).await.unwrap();
    let path = format!("/games/{game_id}/ads");

    let first = server.post(&path, &CreateAdRequest::unique()).await.unwrap();
    let first: AdCreatedResponse = assert_json(first, StatusCode::CREATED).await.unwrap();
    let second = server
        .post(&path, &CreateAdRequest::unique().with_hours("07:05", "09:00"))
        .await
        .unwrap();
    let second: AdCreatedResponse = assert_json(second, StatusCode::CREATED).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let ads: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(ads.len(), 2);
    assert_eq!(ads[0]["id"], second.id.as_str());
    assert_eq!(ads[1]["id"], first.id.as_str());
    assert_eq!(ads[0]["hourStart"], "07:05");
    assert_eq!(ads[0]["weekDays"], serde_json::json!([0, 2, 4]));
    assert!(ads.iter().all(|ad| ad.get("discord").is_none()));
}

#[tokio::test]
async fn test_create_ad_for_unknown_game() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            &format!("/games/{}/ads", GameId::generate()),
            &CreateAdRequest::unique(),
        )
        .await
        .unwrap();

    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body, error("Dados inválidos"));
}

#[tokio::test]
async fn test_create_ad_rejects_bad_input() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let game_id = server.seed_game(&unique_title("Chess")).await.unwrap();
    let path = format!("/games/{game_id}/ads");

    let bad_hour = CreateAdRequest::unique().with_hours("24:00", "10:00");
    let response = server.post(&path, &bad_hour).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body, error("Dados inválidos"));

    let response = server.post_raw(&path, "{\"name\": 1}").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body, error("Dados inválidos"));

    let response = server.get(&path).await.unwrap();
    let ads: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(ads.is_empty());
}

#[tokio::test]
async fn test_list_ads_invalid_game_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/games/not-a-game/ads").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body, error("Jogo inválido"));
}

#[tokio::test]
async fn test_get_ad_discord() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let game_id = server.seed_game(&unique_title("Rocket League")).await.unwrap();
    let request = CreateAdRequest::unique();

    let response = server
        .post(&format!("/games/{game_id}/ads"), &request)
        .await
        .unwrap();
    let ad: AdCreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&format!("/ads/{}/discord", ad.id)).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, serde_json::json!({ "discord": request.discord }));

    let response = server.get(&format!("/ads/{}/discord", ad.id)).await.unwrap();
    let body: DiscordResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.discord, request.discord);
}

#[tokio::test]
async fn test_get_discord_of_unknown_ad() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/ads/{}/discord", AdId::generate()))
        .await
        .unwrap();

    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body, error("Anúncio inválido"));
}
