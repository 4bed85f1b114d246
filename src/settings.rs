//! Picker settings and preferences
//!
//! Persisted separately from saved games in the same key-value store.

use serde::{Deserialize, Serialize};

use crate::consts::{SAVED_GAMES_KEY, SETTINGS_KEY};
use crate::persistence::KeyValueStore;

/// Most verbose level any settings can ask for; the logger starts here
pub const MAX_LOG_LEVEL: log::Level = log::Level::Debug;

/// Picker settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Storage key the saved games live under
    pub storage_key: String,
    /// Ask before wiping the saved-games list
    pub confirm_clear: bool,
    /// Log at debug level instead of info
    pub verbose_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: SAVED_GAMES_KEY.to_string(),
            confirm_clear: true,
            verbose_logging: false,
        }
    }
}

impl Settings {
    /// Log level implied by these settings
    pub fn log_level(&self) -> log::Level {
        if self.verbose_logging {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    /// Saved games can't live under an empty key or on top of the settings
    fn storage_key_usable(&self) -> bool {
        !self.storage_key.is_empty() && self.storage_key != SETTINGS_KEY
    }

    /// Load settings from the store, falling back to defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        if let Some(json) = store.load(SETTINGS_KEY) {
            match serde_json::from_str::<Settings>(&json) {
                Ok(settings) if settings.storage_key_usable() => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Ok(settings) => {
                    log::warn!("Ignoring settings with storage key '{}'", settings.storage_key)
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameSelectionEngine;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.storage_key, "saved-games");
        assert!(settings.confirm_clear);
        assert_eq!(settings.log_level(), log::Level::Info);
    }

    #[test]
    fn test_load_missing_uses_defaults() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_load_stored_settings() {
        let json = r#"{"storage_key":"my-games","confirm_clear":false,"verbose_logging":true}"#;
        let store = MemoryStore::with_entry(SETTINGS_KEY, json);
        let loaded = Settings::load(&store);
        assert_eq!(
            loaded,
            Settings {
                storage_key: "my-games".to_string(),
                confirm_clear: false,
                verbose_logging: true,
            }
        );
        assert_eq!(loaded.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_log_level_never_exceeds_startup_level() {
        for verbose_logging in [false, true] {
            let settings = Settings {
                verbose_logging,
                ..Settings::default()
            };
            assert!(settings.log_level() <= MAX_LOG_LEVEL);
        }
    }

    #[test]
    fn test_settings_key_collision_falls_back() {
        let json = format!(r#"{{"storage_key":"{}"}}"#, SETTINGS_KEY);
        let store = MemoryStore::with_entry(SETTINGS_KEY, &json);
        let settings = Settings::load(&store);
        assert_eq!(settings, Settings::default());

        // Saved games survive a restart instead of clobbering the settings entry
        let mut engine = GameSelectionEngine::with_settings(store, 1, &settings);
        for n in 1..=6 {
            engine.add_candidate(n);
        }
        engine.commit().unwrap();
        let store = engine.into_store();
        assert_eq!(store.load(SETTINGS_KEY).as_deref(), Some(json.as_str()));

        let settings = Settings::load(&store);
        let reopened = GameSelectionEngine::with_settings(store, 1, &settings);
        assert_eq!(reopened.saved_games().len(), 1);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let store = MemoryStore::with_entry(SETTINGS_KEY, r#"{"confirm_clear":false}"#);
        let loaded = Settings::load(&store);
        assert!(!loaded.confirm_clear);
        assert_eq!(loaded.storage_key, SAVED_GAMES_KEY);
    }

    #[test]
    fn test_bad_settings_fall_back() {
        let store = MemoryStore::with_entry(SETTINGS_KEY, "{oops");
        assert_eq!(Settings::load(&store), Settings::default());

        let store = MemoryStore::with_entry(SETTINGS_KEY, r#"{"storage_key":""}"#);
        assert_eq!(Settings::load(&store), Settings::default());
    }
}
