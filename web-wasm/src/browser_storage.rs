//! localStorage backend for the persisted map token

use patrol_designer_common::{Error, KeyValueStorage, Result};

/// `window.localStorage`; every call re-resolves it so a blocked storage
/// surfaces as an error instead of a panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| Error::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|e| Error::Storage(format!("{:?}", e)))?
        .ok_or_else(|| Error::Storage("localStorage unavailable".to_string()))
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
