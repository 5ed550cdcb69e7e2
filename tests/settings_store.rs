use symbol_chart_wasm::domain::errors::ValidationError;
use symbol_chart_wasm::domain::settings::{
    API_URL_KEY, DEFAULT_REFRESH_INTERVAL_SECS, KeyValueStore, MemoryStore, SETTINGS_KEY, Settings, SettingsStore,
};

#[test]
fn defaults_when_nothing_is_stored() {
    let store = SettingsStore::new(MemoryStore::new());
    let settings = store.load();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.api_base_url, None);
    assert!(!settings.auto_refresh);
    assert_eq!(settings.refresh_interval_seconds, DEFAULT_REFRESH_INTERVAL_SECS);
}

#[test]
fn saved_settings_load_back() {
    let store = SettingsStore::new(MemoryStore::new());
    let settings = Settings {
        api_base_url: Some("http://localhost:8000/api".into()),
        auto_refresh: true,
        refresh_interval_seconds: 15,
    };
    store.save(&settings).unwrap();

    assert_eq!(store.load(), settings);
    assert_eq!(
        store.storage().get(SETTINGS_KEY).unwrap().as_deref(),
        Some(r#"{"autoRefresh":true,"refreshInterval":15}"#)
    );
}

#[test]
fn clearing_the_url_removes_its_key() {
    let store = SettingsStore::new(MemoryStore::new());
    store.storage().set(API_URL_KEY, "http://old").unwrap();

    store.save(&Settings::default()).unwrap();

    assert_eq!(store.storage().get(API_URL_KEY).unwrap(), None);
    assert_eq!(store.load().api_base_url, None);
}

#[test]
fn corrupt_blob_yields_defaults_but_keeps_url() {
    let store = SettingsStore::new(MemoryStore::new());
    store.storage().set(API_URL_KEY, "http://api.local").unwrap();
    store.storage().set(SETTINGS_KEY, "{not json").unwrap();

    let settings = store.load();
    assert_eq!(settings.api_base_url.as_deref(), Some("http://api.local"));
    assert!(!settings.auto_refresh);
    assert_eq!(settings.refresh_interval_seconds, DEFAULT_REFRESH_INTERVAL_SECS);
}

#[test]
fn partial_blob_overlays_defaults() {
    let store = SettingsStore::new(MemoryStore::new());
    store.storage().set(SETTINGS_KEY, r#"{"autoRefresh":true}"#).unwrap();

    let settings = store.load();
    assert!(settings.auto_refresh);
    assert_eq!(settings.refresh_interval_seconds, DEFAULT_REFRESH_INTERVAL_SECS);
}

#[test]
fn too_short_interval_is_invalid() {
    let settings = Settings { refresh_interval_seconds: 4, ..Settings::default() };
    assert_eq!(settings.validate(), Err(ValidationError::RefreshIntervalTooShort { min: 5 }));
    assert!(Settings { refresh_interval_seconds: 5, ..Settings::default() }.validate().is_ok());
}
