//! Time-bounded response cache over the client-side store.
//!
//! Entries are stored as `{ "payload": <json>, "stored_at": <unix ms> }`.
//! Reads are bounded by a caller-supplied max age; anything older is purged
//! on the spot. Corrupt entries never surface as errors, only as misses.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::Storage;

/// Default freshness window for cached list queries.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    payload: Value,
    stored_at: i64,
}

/// TTL cache keyed by request shape.
#[derive(Clone)]
pub struct Cache {
    storage: Arc<dyn Storage>,
}

impl Cache {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Returns the stored payload when an entry exists and is no older than
    /// `max_age`. A stale entry is deleted as a side effect of the read.
    pub fn get<T: DeserializeOwned>(&self, key: &str, max_age: Duration) -> Option<T> {
        let raw = self.storage.get(key)?;

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Malformed cache entry for '{key}', treating as miss: {e}");
                return None;
            }
        };

        let age_ms = Utc::now().timestamp_millis().saturating_sub(entry.stored_at);
        if age_ms > max_age.as_millis() as i64 {
            debug!("Cache entry '{key}' expired ({age_ms} ms old), purging");
            self.storage.remove(key);
            return None;
        }

        match serde_json::from_value(entry.payload) {
            Ok(payload) => {
                debug!("Cache hit for '{key}' ({age_ms} ms old)");
                Some(payload)
            }
            Err(e) => {
                warn!("Cached payload for '{key}' has unexpected shape, treating as miss: {e}");
                None
            }
        }
    }

    /// Stores `payload` under `key` with the current timestamp, overwriting
    /// any previous entry. Serialization failures are logged and swallowed.
    pub fn set<T: Serialize>(&self, key: &str, payload: &T) {
        let payload = match serde_json::to_value(payload) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to serialize cache payload for '{key}': {e}");
                return;
            }
        };

        let entry = CacheEntry {
            payload,
            stored_at: Utc::now().timestamp_millis(),
        };
        match serde_json::to_string(&entry) {
            Ok(serialized) => {
                debug!("Caching entry '{key}'");
                self.storage.set(key, &serialized);
            }
            Err(e) => warn!("Failed to serialize cache entry for '{key}': {e}"),
        }
    }

    /// Deletes one entry; an absent key is a no-op.
    pub fn remove(&self, key: &str) {
        self.storage.remove(key);
    }

    /// Deletes every entry whose key contains `pattern`. Used to invalidate
    /// all cached list queries for a resource type after a write.
    pub fn remove_by_pattern(&self, pattern: &str) {
        let mut removed = 0usize;
        for key in self.storage.keys() {
            if key.contains(pattern) {
                self.storage.remove(&key);
                removed += 1;
            }
        }
        debug!("Removed {removed} cache entries matching '{pattern}'");
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
