//! Release-calendar and personal-event operations.
//!
//! `/calendar` serves the shared month view; `/calendar-events` is the
//! logged-in user's own schedule.

use reqwest::Method;
use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{ApiResponse, CalendarEvent, EventList, EventRangeParams, NewCalendarEvent};

use super::client::query_string;
use super::GameInfoApi;

impl GameInfoApi {
    /// All events of one month of the shared release calendar.
    pub async fn month_events(&self, year: i32, month: u32) -> ApiResult<ApiResponse<EventList>> {
        self.request(
            Method::GET,
            &format!("/calendar?year={year}&month={month}"),
            None,
        )
        .await
    }

    /// Adds an event to the shared release calendar.
    pub async fn create_event(
        &self,
        event: &NewCalendarEvent,
    ) -> ApiResult<ApiResponse<CalendarEvent>> {
        self.request(
            Method::POST,
            "/calendar/events",
            Some(serde_json::to_value(event)?),
        )
        .await
    }

    pub async fn list_user_events(
        &self,
        range: &EventRangeParams,
    ) -> ApiResult<ApiResponse<EventList>> {
        let endpoint = format!("/calendar-events{}", query_string(&range.query_pairs()));
        self.request(Method::GET, &endpoint, None).await
    }

    pub async fn get_user_event(&self, event_id: u64) -> ApiResult<ApiResponse<CalendarEvent>> {
        self.request(Method::GET, &format!("/calendar-events/{event_id}"), None)
            .await
    }

    pub async fn create_user_event(
        &self,
        event: &NewCalendarEvent,
    ) -> ApiResult<ApiResponse<CalendarEvent>> {
        self.request(
            Method::POST,
            "/calendar-events",
            Some(serde_json::to_value(event)?),
        )
        .await
    }

    pub async fn update_user_event(
        &self,
        event_id: u64,
        event: &NewCalendarEvent,
    ) -> ApiResult<ApiResponse<CalendarEvent>> {
        self.request(
            Method::PUT,
            &format!("/calendar-events/{event_id}"),
            Some(serde_json::to_value(event)?),
        )
        .await
    }

    pub async fn delete_user_event(&self, event_id: u64) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::DELETE, &format!("/calendar-events/{event_id}"), None)
            .await
    }
}
