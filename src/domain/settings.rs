//! User settings and their persistence over a key-value store.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::errors::{AppResult, ValidationError};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

pub const API_URL_KEY: &str = "symbol_chart.api_url";
pub const SETTINGS_KEY: &str = "symbol_chart.settings";

pub const DEFAULT_REFRESH_INTERVAL_SECS: u32 = 60;
pub const MIN_REFRESH_INTERVAL_SECS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: Option<String>,
    pub auto_refresh: bool,
    pub refresh_interval_seconds: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: None,
            auto_refresh: false,
            refresh_interval_seconds: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.refresh_interval_seconds < MIN_REFRESH_INTERVAL_SECS {
            return Err(ValidationError::RefreshIntervalTooShort { min: MIN_REFRESH_INTERVAL_SECS });
        }
        Ok(())
    }

    /// Base URL without trailing slashes, `None` when blank
    pub fn api_base(&self) -> Option<&str> {
        self.api_base_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }
}

/// Persisted blob; fields missing in storage fall back to defaults individually.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    #[serde(default)]
    auto_refresh: Option<bool>,
    #[serde(default)]
    refresh_interval: Option<u32>,
}

/// Synchronous string key-value storage (browser `localStorage` in production)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// In-memory store, used when `localStorage` is unavailable and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

pub struct SettingsStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read settings, overlaying whatever is stored onto the defaults.
    /// Corrupt or unreadable storage yields defaults.
    pub fn load(&self) -> Settings {
        let mut settings = Settings::default();

        match self.storage.get(API_URL_KEY) {
            Ok(url) => settings.api_base_url = url.filter(|u| !u.trim().is_empty()),
            Err(e) => {
                log_warn!(LogComponent::Domain("SettingsStore"), "API URL unreadable: {}", e);
            }
        }

        let stored = match self.storage.get(SETTINGS_KEY) {
            Ok(Some(json)) => serde_json::from_str::<StoredSettings>(&json).unwrap_or_else(|e| {
                log_warn!(LogComponent::Domain("SettingsStore"), "Ignoring corrupt settings blob: {}", e);
                StoredSettings::default()
            }),
            Ok(None) => StoredSettings::default(),
            Err(e) => {
                log_warn!(LogComponent::Domain("SettingsStore"), "Settings unreadable: {}", e);
                StoredSettings::default()
            }
        };

        if let Some(auto_refresh) = stored.auto_refresh {
            settings.auto_refresh = auto_refresh;
        }
        if let Some(interval) = stored.refresh_interval {
            settings.refresh_interval_seconds = interval;
        }

        log_debug!(LogComponent::Domain("SettingsStore"), "Loaded settings: {:?}", settings);
        settings
    }

    pub fn save(&self, settings: &Settings) -> AppResult<()> {
        match settings.api_base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(url) => self.storage.set(API_URL_KEY, url)?,
            None => self.storage.remove(API_URL_KEY)?,
        }

        let blob = StoredSettings {
            auto_refresh: Some(settings.auto_refresh),
            refresh_interval: Some(settings.refresh_interval_seconds),
        };
        self.storage.set(SETTINGS_KEY, &serde_json::to_string(&blob)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_uses_camel_case_keys() {
        let store = SettingsStore::new(MemoryStore::new());
        store
            .save(&Settings { api_base_url: None, auto_refresh: true, refresh_interval_seconds: 15 })
            .unwrap();
        let blob = store.storage().get(SETTINGS_KEY).unwrap().unwrap();
        assert_eq!(blob, r#"{"autoRefresh":true,"refreshInterval":15}"#);
    }

    #[test]
    fn api_base_trims_trailing_slash() {
        let settings = Settings { api_base_url: Some(" http://localhost:8000/ ".into()), ..Settings::default() };
        assert_eq!(settings.api_base(), Some("http://localhost:8000"));
        let blank = Settings { api_base_url: Some("   ".into()), ..Settings::default() };
        assert_eq!(blank.api_base(), None);
    }

    #[test]
    fn short_interval_is_invalid() {
        let settings = Settings { refresh_interval_seconds: 2, ..Settings::default() };
        assert_eq!(
            settings.validate(),
            Err(ValidationError::RefreshIntervalTooShort { min: MIN_REFRESH_INTERVAL_SECS })
        );
        assert!(Settings::default().validate().is_ok());
    }
}
