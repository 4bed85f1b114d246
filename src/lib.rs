//! Mega-Sena Picker - choose, randomize and save lottery games
//!
//! Core modules:
//! - `engine`: Selection rules, randomization and saved-game bookkeeping
//! - `persistence`: Key-value storage backends (memory, LocalStorage)
//! - `settings`: User preferences persisted alongside saved games
//! - `view`: DOM-free presentation model rendered by the web front-end
//! - `error`: Error types reported by engine operations

pub mod engine;
pub mod error;
pub mod persistence;
pub mod settings;
pub mod view;

pub use engine::{CommittedGame, GameSelectionEngine, SavedGames, Selection};
pub use error::{GameFormatError, PickError};
pub use persistence::{BrowserStorage, KeyValueStore, MemoryStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Smallest selectable number
    pub const MIN_NUMBER: u8 = 1;
    /// Largest selectable number
    pub const MAX_NUMBER: u8 = 60;
    /// Numbers in a complete game
    pub const GAME_SIZE: usize = 6;

    /// Storage key for saved games
    pub const SAVED_GAMES_KEY: &str = "saved-games";
    /// Storage key for settings
    pub const SETTINGS_KEY: &str = "megasena-settings";
}

/// Returns true if `value` is a selectable number
#[inline]
pub fn in_domain(value: u8) -> bool {
    (consts::MIN_NUMBER..=consts::MAX_NUMBER).contains(&value)
}
