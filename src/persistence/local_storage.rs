//! Browser LocalStorage backend

use super::KeyValueStore;

/// `window.localStorage`, if the browser allows it
#[derive(Debug, Clone, Default)]
pub struct BrowserStorage {
    #[cfg(target_arch = "wasm32")]
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    /// Open LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if storage.is_none() {
            log::warn!("LocalStorage unavailable, saved games will not persist");
        }
        Self { storage }
    }

    /// Native stub: no browser storage outside wasm
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open() -> Self {
        Self::default()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn is_available(&self) -> bool {
        false
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("LocalStorage write failed for '{}'", key);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStorage {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn save(&mut self, _key: &str, _value: &str) {
        // No-op for native
    }
}
