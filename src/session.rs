//! Logged-in user state kept in client-side storage.
//!
//! The session is an explicit object over an injected [`Storage`] handle
//! rather than a hidden global: whoever issues requests holds it and reads
//! the token through it.

use std::sync::Arc;

use log::{debug, warn};

use crate::models::AuthUser;
use crate::storage::Storage;

pub(crate) const AUTH_TOKEN_KEY: &str = "authToken";
pub(crate) const USER_KEY: &str = "user";
pub(crate) const RETURN_URL_KEY: &str = "returnUrl";

/// Handle to the stored credential and user profile.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn Storage>,
}

impl Session {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// The bearer token, when a user is logged in.
    pub fn token(&self) -> Option<String> {
        self.storage.get(AUTH_TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) {
        self.storage.set(AUTH_TOKEN_KEY, token);
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// The stored user profile. A malformed stored value reads as absent.
    pub fn user(&self) -> Option<AuthUser> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Stored user profile is malformed, ignoring: {e}");
                None
            }
        }
    }

    pub fn set_user(&self, user: &AuthUser) {
        match serde_json::to_string(user) {
            Ok(serialized) => self.storage.set(USER_KEY, &serialized),
            Err(e) => warn!("Failed to serialize user profile: {e}"),
        }
    }

    /// True only when a stored profile carries the admin flag.
    pub fn is_admin(&self) -> bool {
        self.user().map(|user| user.is_admin).unwrap_or(false)
    }

    /// Bookmarks where to send the user after the next successful login.
    pub fn set_return_url(&self, url: &str) {
        self.storage.set(RETURN_URL_KEY, url);
    }

    /// Consumes the post-login redirect bookmark.
    pub fn take_return_url(&self) -> Option<String> {
        let url = self.storage.get(RETURN_URL_KEY);
        if url.is_some() {
            self.storage.remove(RETURN_URL_KEY);
        }
        url
    }

    /// Drops the credential and profile. Called on logout, including when
    /// the remote logout request failed.
    pub fn clear(&self) {
        debug!("Clearing session state");
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
