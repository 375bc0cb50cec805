//! Key-value storage capability.
//!
//! Session state and cached responses live in one string-valued key-value
//! store with the semantics of browser storage. The store is injected so
//! embedders can back it with whatever persistence they have; tests use the
//! in-memory implementation.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// String-valued key-value store. Values are serialized JSON or opaque
/// tokens; interpretation is the caller's business.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Snapshot of all stored keys, in no particular order.
    fn keys(&self) -> Vec<String>;
}

/// In-memory [`Storage`] implementation.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still holds valid map data; recover it.
    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries().keys().cloned().collect()
    }
}
