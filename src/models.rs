//! Wire models for the game information backend.
//!
//! Every response arrives in the `{ success, data, error?, message? }`
//! envelope. Optional wire fields carry `#[serde(default)]` so partial rows
//! (list endpoints join in version summaries only when one exists) still
//! deserialize.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::forms::ItemCategory;

/// Standard response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

// ── games ────────────────────────────────────────────────────────────

/// A game row as the listing endpoint returns it. The current-version
/// summary fields are joined in by the backend when the game has one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub game_id: u64,
    pub game_name: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub version_id: Option<u64>,
    #[serde(default)]
    pub version_number: Option<String>,
    #[serde(default)]
    pub version_name: Option<String>,
    /// 0/1 flag as the backend sends it.
    #[serde(default)]
    pub is_current: Option<u8>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub new_characters: Option<u32>,
    #[serde(default)]
    pub new_events: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameList {
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGame {
    pub game_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Filters for the game listing. Serializes deterministically, so the JSON
/// form doubles as the cache-key suffix: identical queries share an entry,
/// distinct parameter sets never collide.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GameListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl GameListParams {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(platform) = &self.platform {
            pairs.push(("platform", platform.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

// ── updates ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePost {
    pub update_id: u64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub game_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateList {
    pub updates: Vec<UpdatePost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUpdate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl UpdateListParams {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(game_id) = self.game_id {
            pairs.push(("game_id", game_id.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

// ── versions ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameVersion {
    pub version_id: u64,
    pub game_id: u64,
    pub version_number: String,
    #[serde(default)]
    pub version_name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// 0/1 flag as the backend sends it.
    #[serde(default)]
    pub is_current: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionList {
    pub versions: Vec<GameVersion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVersion {
    pub game_id: u64,
    pub version_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// One announcement item inside a version, tagged with its category. The
/// per-category payload shape is described by [`ItemCategory::fields`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionItem {
    pub item_id: u64,
    pub version_id: u64,
    pub category: ItemCategory,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionItemList {
    pub items: Vec<VersionItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVersionItem {
    pub category: ItemCategory,
    pub data: Value,
}

// ── calendar ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub event_id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub game_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventList {
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCalendarEvent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventRangeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl EventRangeParams {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start_date) = &self.start_date {
            pairs.push(("start_date", start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            pairs.push(("end_date", end_date.clone()));
        }
        pairs
    }
}

// ── auth / user ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub user_id: u64,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl AuthUser {
    /// Name to show in the UI: display name when set, username otherwise.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// ── admin ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub user_id: u64,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserList {
    pub users: Vec<AdminUser>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminPost {
    pub post_id: u64,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminPostList {
    pub posts: Vec<AdminPost>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminPostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminComment {
    pub comment_id: u64,
    pub content: String,
    #[serde(default)]
    pub post_id: Option<u64>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCommentList {
    pub comments: Vec<AdminComment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminReport {
    pub report_id: u64,
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default)]
    pub target_id: Option<u64>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminReportList {
    pub reports: Vec<AdminReport>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminReportUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Paging filters shared by the admin listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PageParams {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}
