//! Moderation operations. All endpoints live under `/admin` and require an
//! admin account's token; the backend enforces that, the client just
//! forwards whatever session it has.

use reqwest::Method;
use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{
    AdminComment, AdminCommentList, AdminPost, AdminPostList, AdminPostUpdate, AdminReport,
    AdminReportList, AdminReportUpdate, AdminUser, AdminUserList, AdminUserUpdate, ApiResponse,
    PageParams,
};

use super::client::query_string;
use super::GameInfoApi;

impl GameInfoApi {
    // ── users ────────────────────────────────────────────────────────

    pub async fn admin_list_users(
        &self,
        params: &PageParams,
    ) -> ApiResult<ApiResponse<AdminUserList>> {
        let endpoint = format!("/admin/users{}", query_string(&params.query_pairs()));
        self.request(Method::GET, &endpoint, None).await
    }

    pub async fn admin_get_user(&self, user_id: u64) -> ApiResult<ApiResponse<AdminUser>> {
        self.request(Method::GET, &format!("/admin/users/{user_id}"), None)
            .await
    }

    pub async fn admin_update_user(
        &self,
        user_id: u64,
        update: &AdminUserUpdate,
    ) -> ApiResult<ApiResponse<AdminUser>> {
        self.request(
            Method::PUT,
            &format!("/admin/users/{user_id}"),
            Some(serde_json::to_value(update)?),
        )
        .await
    }

    pub async fn admin_delete_user(&self, user_id: u64) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::DELETE, &format!("/admin/users/{user_id}"), None)
            .await
    }

    // ── posts ────────────────────────────────────────────────────────

    pub async fn admin_list_posts(
        &self,
        params: &PageParams,
    ) -> ApiResult<ApiResponse<AdminPostList>> {
        let endpoint = format!("/admin/posts{}", query_string(&params.query_pairs()));
        self.request(Method::GET, &endpoint, None).await
    }

    pub async fn admin_get_post(&self, post_id: u64) -> ApiResult<ApiResponse<AdminPost>> {
        self.request(Method::GET, &format!("/admin/posts/{post_id}"), None)
            .await
    }

    pub async fn admin_update_post(
        &self,
        post_id: u64,
        update: &AdminPostUpdate,
    ) -> ApiResult<ApiResponse<AdminPost>> {
        self.request(
            Method::PUT,
            &format!("/admin/posts/{post_id}"),
            Some(serde_json::to_value(update)?),
        )
        .await
    }

    pub async fn admin_delete_post(&self, post_id: u64) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::DELETE, &format!("/admin/posts/{post_id}"), None)
            .await
    }

    // ── comments ─────────────────────────────────────────────────────

    pub async fn admin_list_comments(
        &self,
        params: &PageParams,
    ) -> ApiResult<ApiResponse<AdminCommentList>> {
        let endpoint = format!("/admin/comments{}", query_string(&params.query_pairs()));
        self.request(Method::GET, &endpoint, None).await
    }

    pub async fn admin_get_comment(&self, comment_id: u64) -> ApiResult<ApiResponse<AdminComment>> {
        self.request(Method::GET, &format!("/admin/comments/{comment_id}"), None)
            .await
    }

    pub async fn admin_delete_comment(&self, comment_id: u64) -> ApiResult<ApiResponse<Value>> {
        self.request(
            Method::DELETE,
            &format!("/admin/comments/{comment_id}"),
            None,
        )
        .await
    }

    // ── reports ──────────────────────────────────────────────────────

    pub async fn admin_list_reports(
        &self,
        params: &PageParams,
    ) -> ApiResult<ApiResponse<AdminReportList>> {
        let endpoint = format!("/admin/reports{}", query_string(&params.query_pairs()));
        self.request(Method::GET, &endpoint, None).await
    }

    pub async fn admin_get_report(&self, report_id: u64) -> ApiResult<ApiResponse<AdminReport>> {
        self.request(Method::GET, &format!("/admin/reports/{report_id}"), None)
            .await
    }

    pub async fn admin_update_report(
        &self,
        report_id: u64,
        update: &AdminReportUpdate,
    ) -> ApiResult<ApiResponse<AdminReport>> {
        self.request(
            Method::PUT,
            &format!("/admin/reports/{report_id}"),
            Some(serde_json::to_value(update)?),
        )
        .await
    }

    pub async fn admin_delete_report(&self, report_id: u64) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::DELETE, &format!("/admin/reports/{report_id}"), None)
            .await
    }
}
