use wasm_bindgen::JsValue;

use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::settings::{KeyValueStore, MemoryStore};

fn storage_error(context: &str, error: JsValue) -> AppError {
    AppError::Storage(format!("{context}: {error:?}"))
}

/// `window.localStorage` behind the key-value seam
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> AppResult<Self> {
        let window = web_sys::window().ok_or_else(|| AppError::Storage("window not available".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| storage_error("localStorage access denied", e))?
            .ok_or_else(|| AppError::Storage("localStorage not available".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| storage_error("read failed", e))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage.set_item(key, value).map_err(|e| storage_error("write failed", e))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.storage.remove_item(key).map_err(|e| storage_error("remove failed", e))
    }
}

/// Persistent storage when the browser allows it, memory otherwise
pub enum BrowserStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match LocalStorage::open() {
            Ok(local) => Self::Local(local),
            Err(e) => {
                get_logger().warn(
                    LogComponent::Infrastructure("Storage"),
                    &format!("{e}; settings will not survive a reload"),
                );
                Self::Memory(MemoryStore::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::Local(store) => store.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::Local(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            Self::Local(store) => store.remove(key),
            Self::Memory(store) => store.remove(key),
        }
    }
}
