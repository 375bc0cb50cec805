//! Game catalog operations.
//!
//! The game listing is the one read-through-cached query: identical
//! parameter sets are served from the cache inside the freshness window,
//! and every game mutation invalidates all cached game lists.

use log::{debug, info};
use reqwest::Method;
use serde_json::Value;

use crate::cache::DEFAULT_MAX_AGE;
use crate::error::ApiResult;
use crate::models::{ApiResponse, Game, GameList, GameListParams, NewGame};

use super::client::query_string;
use super::GameInfoApi;

/// Every cached game-list key starts with this; mutations purge by it.
const GAME_LIST_KEY_PREFIX: &str = "games_";

impl GameInfoApi {
    /// Lists games. With `use_cache`, a fresh cached envelope for the same
    /// parameters is returned without a network call; a miss populates the
    /// cache from a successful response. `use_cache = false` skips the read
    /// but still stores the result.
    pub async fn list_games(
        &self,
        params: &GameListParams,
        use_cache: bool,
    ) -> ApiResult<ApiResponse<GameList>> {
        let cache_key = format!("{GAME_LIST_KEY_PREFIX}{}", serde_json::to_string(params)?);

        if use_cache {
            if let Some(cached) = self.cache.get::<ApiResponse<GameList>>(&cache_key, DEFAULT_MAX_AGE) {
                debug!("Serving game list from cache");
                return Ok(cached);
            }
        }

        let endpoint = format!("/games{}", query_string(&params.query_pairs()));
        let response: ApiResponse<GameList> = self.request(Method::GET, &endpoint, None).await?;

        if response.success {
            self.cache.set(&cache_key, &response);
        }

        Ok(response)
    }

    pub async fn get_game(&self, game_id: u64) -> ApiResult<ApiResponse<Game>> {
        self.request(Method::GET, &format!("/games/{game_id}"), None)
            .await
    }

    pub async fn create_game(&self, game: &NewGame) -> ApiResult<ApiResponse<Game>> {
        let response: ApiResponse<Game> = self
            .request(Method::POST, "/games", Some(serde_json::to_value(game)?))
            .await?;
        self.invalidate_game_lists();
        Ok(response)
    }

    pub async fn update_game(&self, game_id: u64, game: &NewGame) -> ApiResult<ApiResponse<Game>> {
        let response: ApiResponse<Game> = self
            .request(
                Method::PUT,
                &format!("/games/{game_id}"),
                Some(serde_json::to_value(game)?),
            )
            .await?;
        self.invalidate_game_lists();
        Ok(response)
    }

    pub async fn delete_game(&self, game_id: u64) -> ApiResult<ApiResponse<Value>> {
        let response: ApiResponse<Value> = self
            .request(Method::DELETE, &format!("/games/{game_id}"), None)
            .await?;
        self.invalidate_game_lists();
        Ok(response)
    }

    fn invalidate_game_lists(&self) {
        info!("Invalidating cached game lists");
        self.cache.remove_by_pattern(GAME_LIST_KEY_PREFIX);
    }
}
