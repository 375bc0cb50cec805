//! Tests for the moderation group.

use std::sync::Arc;

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::api::GameInfoApi;
use crate::config::ApiConfig;
use crate::models::{AdminReportUpdate, AdminUserUpdate, PageParams};
use crate::storage::MemoryStorage;

fn api_with_mock(mock_uri: &str) -> GameInfoApi {
    GameInfoApi::new(
        ApiConfig::with_base_url(mock_uri),
        Arc::new(MemoryStorage::new()),
    )
}

#[tokio::test]
async fn user_listing_carries_token_and_paging() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());
    api.session().set_token("admin-token");

    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .and(header("Authorization", "Bearer admin-token"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": {
                "users": [
                    { "user_id": 7, "username": "alice", "is_admin": false }
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = PageParams {
        page: Some(2),
        limit: Some(50),
        search: None,
    };
    let response = api.admin_list_users(&params).await.unwrap();
    assert_eq!(response.data.unwrap().users[0].username, "alice");
}

#[tokio::test]
async fn user_update_sends_only_set_fields() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("PUT"))
        .and(path("/admin/users/7"))
        .and(body_json(serde_json::json!({ "is_admin": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "user_id": 7, "username": "alice", "is_admin": true }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let update = AdminUserUpdate {
        display_name: None,
        is_admin: Some(true),
    };
    let response = api.admin_update_user(7, &update).await.unwrap();
    assert!(response.data.unwrap().is_admin);
}

#[tokio::test]
async fn report_update_changes_status() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("PUT"))
        .and(path("/admin/reports/31"))
        .and(body_json(serde_json::json!({ "status": "resolved" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "report_id": 31, "status": "resolved" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let update = AdminReportUpdate {
        status: Some("resolved".to_string()),
    };
    let response = api.admin_update_report(31, &update).await.unwrap();
    assert_eq!(response.data.unwrap().status.as_deref(), Some("resolved"));
}

#[tokio::test]
async fn comment_moderation_lists_and_deletes() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/admin/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": {
                "comments": [
                    { "comment_id": 19, "content": "spam", "post_id": 2 }
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/admin/comments/19"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = api.admin_list_comments(&PageParams::default()).await.unwrap();
    let comments = response.data.unwrap().comments;
    assert_eq!(comments[0].comment_id, 19);

    api.admin_delete_comment(19).await.unwrap();
}

#[tokio::test]
async fn post_moderation_fetches_detail() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/admin/posts/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "post_id": 2, "title": "Team building thread", "author": "alice" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = api.admin_get_post(2).await.unwrap();
    assert_eq!(response.data.unwrap().author.as_deref(), Some("alice"));
}
