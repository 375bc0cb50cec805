//! Core HTTP request plumbing shared by every resource group.

use log::{debug, error};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

use super::GameInfoApi;

/// Fallback when a failed response carries no usable message.
const GENERIC_FAILURE: &str = "API request failed";

impl GameInfoApi {
    /// Issues one request against the backend and parses the JSON body.
    ///
    /// The session's bearer token is attached when present. A non-success
    /// status yields [`ApiError::Api`] carrying the server's message; an
    /// unparseable body yields [`ApiError::Parse`]. No retries, no explicit
    /// timeout beyond the transport's defaults.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!("{method} {url}");

        let mut builder = self.client.request(method, &url);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status for {endpoint}: {status}");

        let text = response.text().await?;
        let payload: Value = serde_json::from_str(&text)?;

        if !status.is_success() {
            let message = error_message(&payload);
            error!("Request to {endpoint} failed with {status}: {message}");
            return Err(ApiError::Api { status, message });
        }

        Ok(serde_json::from_value(payload)?)
    }
}

/// Message from the error envelope: `error.message`, then the top-level
/// `message`, then the generic fallback.
fn error_message(payload: &Value) -> String {
    payload
        .pointer("/error/message")
        .and_then(Value::as_str)
        .or_else(|| payload.get("message").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// Builds a `?a=1&b=2` query-string suffix; empty input yields an empty
/// string so callers can append unconditionally.
pub(crate) fn query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    format!("?{}", encoded.join("&"))
}
