//! Key-value persistence
//!
//! The engine only needs two calls: read a string by key, write a string by
//! key. Backends:
//! - `MemoryStore`: in-process map (native runs, tests)
//! - `BrowserStorage`: `window.localStorage`, degrading to a no-op store when
//!   the browser has storage disabled

pub mod local_storage;

use std::collections::HashMap;

pub use local_storage::BrowserStorage;

/// Minimal string key-value store.
///
/// An unavailable store returns `None` from `load` and drops writes; callers
/// treat that as an in-memory-only session, not a failure.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `save` calls received
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
    }
}
