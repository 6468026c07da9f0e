//! Game service
//!
//! Read-only access to the game catalogue.

use tracing::instrument;

use crate::dto::GameResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Game service
pub struct GameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GameService<'a> {
    /// Create a new GameService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every game with the number of ads posted for it
    #[instrument(skip(self))]
    pub async fn list_games(&self) -> ServiceResult<Vec<GameResponse>> {
        let games = self.ctx.game_repo().list_with_ad_counts().await?;
        Ok(games.into_iter().map(GameResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestContext;

    #[tokio::test]
    async fn test_list_games_with_counts() {
        let test = TestContext::new();
        let valorant = test.games.seed("Valorant");
        let _chess = test.games.seed("Chess");
        test.seed_ad(valorant, "ana", "ana#1").await;
        test.seed_ad(valorant, "bia", "bia#2").await;

        let games = GameService::new(&test.ctx).list_games().await.unwrap();

        let titles: Vec<_> = games.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Chess", "Valorant"]);
        assert_eq!(games[0].count.ads, 0);
        assert_eq!(games[1].count.ads, 2);
    }

    #[tokio::test]
    async fn test_list_games_empty() {
        let test = TestContext::new();
        let games = GameService::new(&test.ctx).list_games().await.unwrap();
        assert!(games.is_empty());
    }
}
