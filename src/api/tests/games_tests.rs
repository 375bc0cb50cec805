//! Tests for the game catalog group: list caching and invalidation.

use std::sync::Arc;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::api::GameInfoApi;
use crate::config::ApiConfig;
use crate::models::{GameListParams, NewGame};
use crate::storage::MemoryStorage;

fn api_with_mock(mock_uri: &str) -> GameInfoApi {
    GameInfoApi::new(
        ApiConfig::with_base_url(mock_uri),
        Arc::new(MemoryStorage::new()),
    )
}

fn list_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": {
            "games": [
                { "game_id": 1, "game_name": "Star Voyage", "platform": "PC" }
            ]
        }
    })
}

async fn mount_list(mock_server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn identical_queries_issue_one_network_call() {
    super::init_logging();
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());
    mount_list(&mock_server, 1).await;

    let params = GameListParams::default();
    let first = api.list_games(&params, true).await.unwrap();
    let second = api.list_games(&params, true).await.unwrap();

    assert_eq!(first.data.unwrap().games.len(), 1);
    assert_eq!(second.data.unwrap().games.len(), 1);
    // expect(1) verified when mock_server drops
}

#[tokio::test]
async fn distinct_params_never_share_an_entry() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());
    mount_list(&mock_server, 2).await;

    let pc = GameListParams {
        platform: Some("PC".to_string()),
        ..Default::default()
    };
    let mobile = GameListParams {
        platform: Some("Mobile".to_string()),
        ..Default::default()
    };
    api.list_games(&pc, true).await.unwrap();
    api.list_games(&mobile, true).await.unwrap();
}

#[tokio::test]
async fn mutation_invalidates_cached_lists() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());
    mount_list(&mock_server, 2).await;

    Mock::given(method("POST"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "data": { "game_id": 2, "game_name": "Moon Chaser", "platform": "Mobile" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = GameListParams::default();
    api.list_games(&params, true).await.unwrap();

    let new_game = NewGame {
        game_name: "Moon Chaser".to_string(),
        platform: Some("Mobile".to_string()),
        thumbnail_url: None,
    };
    api.create_game(&new_game).await.unwrap();

    // The cached list was invalidated, so this hits the network again
    api.list_games(&params, true).await.unwrap();
}

#[tokio::test]
async fn cache_bypass_always_fetches() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());
    mount_list(&mock_server, 2).await;

    let params = GameListParams::default();
    api.list_games(&params, false).await.unwrap();
    api.list_games(&params, false).await.unwrap();
}

#[tokio::test]
async fn failed_envelope_is_not_cached() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "Catalog is rebuilding"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let params = GameListParams::default();
    let response = api.list_games(&params, true).await.unwrap();
    assert!(!response.success);

    api.list_games(&params, true).await.unwrap();
}

#[tokio::test]
async fn list_params_reach_the_query_string() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("platform", "PC"))
        .and(query_param("search", "star voyage"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = GameListParams {
        platform: Some("PC".to_string()),
        search: Some("star voyage".to_string()),
        page: Some(2),
        limit: None,
    };
    api.list_games(&params, true).await.unwrap();
}

#[tokio::test]
async fn delete_refreshes_the_listing() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());
    mount_list(&mock_server, 2).await;

    Mock::given(method("DELETE"))
        .and(path("/games/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = GameListParams::default();
    api.list_games(&params, true).await.unwrap();
    api.delete_game(1).await.unwrap();
    api.list_games(&params, true).await.unwrap();
}
