//! Update-news operations.

use reqwest::Method;

use crate::error::ApiResult;
use crate::models::{ApiResponse, NewUpdate, UpdateList, UpdateListParams, UpdatePost};

use super::client::query_string;
use super::GameInfoApi;

impl GameInfoApi {
    pub async fn list_updates(
        &self,
        params: &UpdateListParams,
    ) -> ApiResult<ApiResponse<UpdateList>> {
        let endpoint = format!("/updates{}", query_string(&params.query_pairs()));
        self.request(Method::GET, &endpoint, None).await
    }

    pub async fn get_update(&self, update_id: u64) -> ApiResult<ApiResponse<UpdatePost>> {
        self.request(Method::GET, &format!("/updates/{update_id}"), None)
            .await
    }

    pub async fn create_update(&self, update: &NewUpdate) -> ApiResult<ApiResponse<UpdatePost>> {
        self.request(
            Method::POST,
            "/updates",
            Some(serde_json::to_value(update)?),
        )
        .await
    }
}
