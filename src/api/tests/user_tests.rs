//! Tests for authentication side effects and favorites.

use std::sync::Arc;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::api::GameInfoApi;
use crate::config::ApiConfig;
use crate::storage::MemoryStorage;

fn api_with_mock(mock_uri: &str) -> GameInfoApi {
    GameInfoApi::new(
        ApiConfig::with_base_url(mock_uri),
        Arc::new(MemoryStorage::new()),
    )
}

fn login_success_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": {
            "token": "abc",
            "user": {
                "user_id": 7,
                "username": "alice",
                "display_name": "Alice",
                "is_admin": false
            }
        }
    })
}

#[tokio::test]
async fn login_persists_token_and_user() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "username": "alice",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = api.login("alice", "hunter2").await.unwrap();
    assert!(response.success);

    assert_eq!(api.session().token(), Some("abc".to_string()));
    let user = api.session().user().unwrap();
    assert_eq!(user.username, "alice");
    assert!(!user.is_admin);
}

#[tokio::test]
async fn failed_login_leaves_session_empty() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "error": { "message": "Invalid credentials" }
        })))
        .mount(&mock_server)
        .await;

    assert!(api.login("alice", "wrong").await.is_err());
    assert!(api.session().token().is_none());
    assert!(api.session().user().is_none());
}

#[tokio::test]
async fn success_without_token_is_not_persisted() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": {
                "token": "",
                "user": { "user_id": 7, "username": "alice" }
            }
        })))
        .mount(&mock_server)
        .await;

    api.login("alice", "hunter2").await.unwrap();
    assert!(api.session().token().is_none());
}

#[tokio::test]
async fn register_persists_session_like_login() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(login_success_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let new_user = crate::models::NewUser {
        username: "alice".to_string(),
        password: "hunter2".to_string(),
        display_name: Some("Alice".to_string()),
        email: None,
    };
    api.register(&new_user).await.unwrap();

    assert_eq!(api.session().token(), Some("abc".to_string()));
}

#[tokio::test]
async fn logout_clears_session_on_success() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());
    api.session().set_token("abc");

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    api.logout().await.unwrap();
    assert!(api.session().token().is_none());
    assert!(api.session().user().is_none());
}

#[tokio::test]
async fn logout_clears_session_when_server_rejects() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());
    api.session().set_token("abc");

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "success": false,
            "error": { "message": "Session store unavailable" }
        })))
        .mount(&mock_server)
        .await;

    assert!(api.logout().await.is_err());
    assert!(api.session().token().is_none());
}

#[tokio::test]
async fn logout_clears_session_when_backend_is_unreachable() {
    let api = api_with_mock("http://127.0.0.1:1/api");
    api.session().set_token("abc");

    assert!(api.logout().await.is_err());
    assert!(api.session().token().is_none());
}

#[tokio::test]
async fn add_favorite_sends_game_id() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/user/favorites"))
        .and(body_json(serde_json::json!({ "game_id": 5 })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    api.add_favorite(5).await.unwrap();
}

#[tokio::test]
async fn favorites_parse_as_a_game_list() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/user/favorites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": {
                "games": [
                    { "game_id": 5, "game_name": "Moon Chaser", "platform": "Mobile" }
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let response = api.favorites().await.unwrap();
    assert_eq!(response.data.unwrap().games[0].game_id, 5);
}

#[tokio::test]
async fn remove_favorite_targets_the_game() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("DELETE"))
        .and(path("/user/favorites/5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    api.remove_favorite(5).await.unwrap();
}
