//! Backend endpoint selection.
//!
//! The backend lives at a different base path depending on where the client
//! runs: a local dev server during development, the hosted deployment
//! otherwise. The hostname is the only environment signal.

/// Base path of the local development backend.
pub const LOCAL_BASE_URL: &str = "http://localhost:8080/api";

/// Base path of the hosted backend.
pub const HOSTED_BASE_URL: &str = "https://gameinfobackend-production.up.railway.app/api";

/// Connection settings for the backend API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Picks the backend base path for the host the client is served from.
    /// `localhost` and loopback go to the dev server, everything else to the
    /// hosted deployment.
    pub fn for_hostname(hostname: &str) -> Self {
        let base_url = if hostname == "localhost" || hostname == "127.0.0.1" {
            LOCAL_BASE_URL
        } else {
            HOSTED_BASE_URL
        };
        log::debug!("Resolved base URL for host '{hostname}': {base_url}");
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Uses an explicit base URL. Tests point this at a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(HOSTED_BASE_URL)
    }
}
