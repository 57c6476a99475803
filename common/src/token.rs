//! Map access token persistence
//!
//! The token lives in a key/value backend under [`TOKEN_STORAGE_KEY`]. It is
//! read once when the handle is created and written back on every change.

use crate::error::Result;
use std::collections::HashMap;

pub const TOKEN_STORAGE_KEY: &str = "mapbox_token";

/// Minimal string key/value backend (browser localStorage, config file, ...)
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Token handle bound to a backend
#[derive(Debug)]
pub struct AccessToken<S: KeyValueStorage> {
    storage: S,
    value: String,
}

impl<S: KeyValueStorage> AccessToken<S> {
    /// Loads the stored token; a missing or unreadable entry reads as empty
    pub fn load(storage: S) -> Self {
        let value = match storage.get(TOKEN_STORAGE_KEY) {
            Ok(v) => v.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored token");
                String::new()
            }
        };
        Self { storage, value }
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn is_set(&self) -> bool {
        !self.value.is_empty()
    }

    /// Updates the in-memory value and persists it
    pub fn set(&mut self, value: impl Into<String>) -> Result<()> {
        self.value = value.into();
        self.storage.set(TOKEN_STORAGE_KEY, &self.value)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.set(String::new())
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
