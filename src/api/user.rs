//! Authentication, profile and favorites operations.

use log::info;
use reqwest::Method;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::models::{ApiResponse, AuthData, AuthUser, Credentials, GameList, NewUser};

use super::GameInfoApi;

impl GameInfoApi {
    /// Logs in. A successful response persists the token and user profile
    /// into the session as a side effect.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<ApiResponse<AuthData>> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: ApiResponse<AuthData> = self
            .request(
                Method::POST,
                "/auth/login",
                Some(serde_json::to_value(&credentials)?),
            )
            .await?;
        self.persist_auth(&response);
        Ok(response)
    }

    /// Registers a new account. Like login, a successful response persists
    /// the returned session.
    pub async fn register(&self, user: &NewUser) -> ApiResult<ApiResponse<AuthData>> {
        let response: ApiResponse<AuthData> = self
            .request(
                Method::POST,
                "/auth/register",
                Some(serde_json::to_value(user)?),
            )
            .await?;
        self.persist_auth(&response);
        Ok(response)
    }

    pub async fn current_user(&self) -> ApiResult<ApiResponse<AuthUser>> {
        self.request(Method::GET, "/auth/me", None).await
    }

    /// Logs out. Local session state is cleared whether or not the remote
    /// call succeeds; a remote failure still propagates afterwards.
    pub async fn logout(&self) -> ApiResult<()> {
        let result: ApiResult<ApiResponse<Value>> =
            self.request(Method::POST, "/auth/logout", None).await;
        self.session.clear();
        result.map(|_| ())
    }

    pub async fn favorites(&self) -> ApiResult<ApiResponse<GameList>> {
        self.request(Method::GET, "/user/favorites", None).await
    }

    pub async fn add_favorite(&self, game_id: u64) -> ApiResult<ApiResponse<Value>> {
        self.request(
            Method::POST,
            "/user/favorites",
            Some(json!({ "game_id": game_id })),
        )
        .await
    }

    pub async fn remove_favorite(&self, game_id: u64) -> ApiResult<ApiResponse<Value>> {
        self.request(
            Method::DELETE,
            &format!("/user/favorites/{game_id}"),
            None,
        )
        .await
    }

    fn persist_auth(&self, response: &ApiResponse<AuthData>) {
        if !response.success {
            return;
        }
        if let Some(auth) = &response.data {
            if auth.token.is_empty() {
                return;
            }
            info!("Storing session for '{}'", auth.user.username);
            self.session.set_token(&auth.token);
            self.session.set_user(&auth.user);
        }
    }
}
