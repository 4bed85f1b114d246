//! Game selection engine
//!
//! All selection rules live here. This module has no DOM dependencies:
//! - Candidates outside the board, repeated or beyond a full game are ignored
//! - Saved games are sorted and unique
//! - Randomness comes from a seeded RNG only
//! - Storage goes through the `KeyValueStore` trait

pub mod game;
pub mod picker;
pub mod selection;

pub use game::{CommittedGame, SavedGames};
pub use picker::{GameSelectionEngine, Snapshot};
pub use selection::Selection;
