//! `window.localStorage` backend. Values are stored as UTF-8 strings.

use async_trait::async_trait;
use widget_core::ports::StoragePort;
use widget_types::{Result, WidgetError};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| WidgetError::Storage("no window (not running in a browser)".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| WidgetError::JsInterop(format!("localStorage access denied: {:?}", e)))?
            .ok_or_else(|| WidgetError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .storage
            .get_item(key)
            .map_err(|e| WidgetError::Storage(format!("get {}: {:?}", key, e)))?;
        Ok(value.map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| WidgetError::Storage(format!("set {}: value is not UTF-8: {}", key, e)))?;
        self.storage
            .set_item(key, text)
            .map_err(|e| WidgetError::Storage(format!("set {}: {:?}", key, e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| WidgetError::Storage(format!("delete {}: {:?}", key, e)))
    }

    fn backend_name(&self) -> &str {
        "localStorage"
    }
}
