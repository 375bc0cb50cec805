//! Game version operations, including the nested announcement items.

use reqwest::Method;
use serde_json::Value;

use crate::error::ApiResult;
use crate::forms::ItemCategory;
use crate::models::{
    ApiResponse, GameVersion, NewVersion, NewVersionItem, VersionItem, VersionItemList,
    VersionList,
};

use super::GameInfoApi;

impl GameInfoApi {
    pub async fn list_versions_for_game(
        &self,
        game_id: u64,
    ) -> ApiResult<ApiResponse<VersionList>> {
        self.request(Method::GET, &format!("/versions?game_id={game_id}"), None)
            .await
    }

    pub async fn get_version(&self, version_id: u64) -> ApiResult<ApiResponse<GameVersion>> {
        self.request(Method::GET, &format!("/versions/{version_id}"), None)
            .await
    }

    /// Lists a version's announcement items, optionally restricted to one
    /// category.
    pub async fn list_version_items(
        &self,
        version_id: u64,
        category: Option<ItemCategory>,
    ) -> ApiResult<ApiResponse<VersionItemList>> {
        let endpoint = match category {
            Some(category) => format!("/versions/{version_id}/items?category={category}"),
            None => format!("/versions/{version_id}/items"),
        };
        self.request(Method::GET, &endpoint, None).await
    }

    pub async fn create_version(
        &self,
        version: &NewVersion,
    ) -> ApiResult<ApiResponse<GameVersion>> {
        self.request(
            Method::POST,
            "/versions",
            Some(serde_json::to_value(version)?),
        )
        .await
    }

    pub async fn update_version(
        &self,
        version_id: u64,
        version: &NewVersion,
    ) -> ApiResult<ApiResponse<GameVersion>> {
        self.request(
            Method::PUT,
            &format!("/versions/{version_id}"),
            Some(serde_json::to_value(version)?),
        )
        .await
    }

    pub async fn delete_version(&self, version_id: u64) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::DELETE, &format!("/versions/{version_id}"), None)
            .await
    }

    pub async fn add_version_item(
        &self,
        version_id: u64,
        item: &NewVersionItem,
    ) -> ApiResult<ApiResponse<VersionItem>> {
        self.request(
            Method::POST,
            &format!("/versions/{version_id}/items"),
            Some(serde_json::to_value(item)?),
        )
        .await
    }

    /// Updates one announcement item. The backend addresses items through
    /// the query string, not the path.
    pub async fn update_version_item(
        &self,
        version_id: u64,
        item_id: u64,
        item: &NewVersionItem,
    ) -> ApiResult<ApiResponse<VersionItem>> {
        self.request(
            Method::PUT,
            &format!("/versions/{version_id}/items?item_id={item_id}"),
            Some(serde_json::to_value(item)?),
        )
        .await
    }

    pub async fn delete_version_item(
        &self,
        version_id: u64,
        item_id: u64,
    ) -> ApiResult<ApiResponse<Value>> {
        self.request(
            Method::DELETE,
            &format!("/versions/{version_id}/items?item_id={item_id}"),
            None,
        )
        .await
    }
}
