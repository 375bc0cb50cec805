//! Client for the game information REST backend.
//!
//! One [`GameInfoApi`] value owns the HTTP client, the backend address, the
//! session and the response cache. Session and cache share a single injected
//! [`Storage`] handle. Operations are grouped per backend resource, one file
//! each.

mod admin;
mod calendar;
mod client;
mod games;
mod updates;
mod user;
mod versions;

use std::sync::Arc;

use reqwest::Client;

use crate::cache::Cache;
use crate::config::ApiConfig;
use crate::session::Session;
use crate::storage::Storage;

/// Client for the game information backend.
pub struct GameInfoApi {
    pub(crate) client: Client,
    pub(crate) config: ApiConfig,
    pub(crate) session: Session,
    pub(crate) cache: Cache,
}

impl GameInfoApi {
    /// Creates a client for the given backend, keeping session and cached
    /// responses in `storage`.
    pub fn new(config: ApiConfig, storage: Arc<dyn Storage>) -> Self {
        log::info!("Creating API client for {}", config.base_url);
        Self {
            client: Client::new(),
            session: Session::new(Arc::clone(&storage)),
            cache: Cache::new(storage),
            config,
        }
    }

    /// The session this client reads its bearer token from.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The response cache. Exposed so embedders can invalidate out of band.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
