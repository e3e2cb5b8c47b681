//! `window.localStorage` backend for the web build.

use crate::{KeyValueStore, StoreError};
use web_sys::Storage;

pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    /// Fails when there is no window or the browser refuses storage access
    /// (private mode, disabled cookies, sandboxed iframe).
    pub fn open() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("localStorage error: {:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("no localStorage".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("failed to get {}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("failed to set {}: {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("failed to remove {}: {:?}", key, e)))
    }
}
