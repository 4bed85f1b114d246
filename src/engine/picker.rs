//! The selection engine: board, current game and saved games

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::game::{CommittedGame, SavedGames};
use super::selection::Selection;
use crate::consts::{GAME_SIZE, MAX_NUMBER, MIN_NUMBER};
use crate::error::PickError;
use crate::persistence::KeyValueStore;
use crate::settings::Settings;

/// Read-only view of the engine handed to the presentation layer
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Every selectable number, ascending
    pub domain: &'a [u8],
    /// Current game in pick order
    pub selection: &'a [u8],
    /// Saved games, oldest first
    pub saved: &'a [CommittedGame],
}

impl Snapshot<'_> {
    pub fn is_complete(&self) -> bool {
        self.selection.len() == GAME_SIZE
    }

    pub fn is_selected(&self, value: u8) -> bool {
        self.selection.contains(&value)
    }
}

/// Owns the board, the game being picked and the saved games.
///
/// Saved games are written to the store after every change to them.
pub struct GameSelectionEngine<S: KeyValueStore> {
    domain: Vec<u8>,
    current: Selection,
    saved: SavedGames,
    store: S,
    storage_key: String,
    rng: Pcg32,
}

impl<S: KeyValueStore> GameSelectionEngine<S> {
    /// Create an engine with default settings
    pub fn new(store: S, seed: u64) -> Self {
        Self::with_settings(store, seed, &Settings::default())
    }

    /// Build the board and load saved games from the store.
    /// Missing or unreadable data starts an empty list.
    pub fn with_settings(store: S, seed: u64, settings: &Settings) -> Self {
        let storage_key = settings.storage_key.clone();
        let saved = match store.load(&storage_key) {
            Some(json) => SavedGames::from_json(&json),
            None => SavedGames::new(),
        };
        log::info!("Loaded {} saved games", saved.len());

        Self {
            domain: (MIN_NUMBER..=MAX_NUMBER).collect(),
            current: Selection::new(),
            saved,
            store,
            storage_key,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn domain(&self) -> &[u8] {
        &self.domain
    }

    pub fn selection(&self) -> &Selection {
        &self.current
    }

    pub fn saved_games(&self) -> &SavedGames {
        &self.saved
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back (e.g. to reopen it after a simulated restart)
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            domain: &self.domain,
            selection: self.current.numbers(),
            saved: self.saved.as_slice(),
        }
    }

    /// Pick a number. Off-board, repeated and overflow picks are ignored.
    pub fn add_candidate(&mut self, value: u8) -> bool {
        let added = self.current.add(value);
        if added {
            log::debug!("Picked {} ({}/{})", value, self.current.len(), GAME_SIZE);
        }
        added
    }

    /// Unpick a number. Ignored if it was not picked.
    pub fn remove_candidate(&mut self, value: u8) -> bool {
        let removed = self.current.remove(value);
        if removed {
            log::debug!("Unpicked {} ({}/{})", value, self.current.len(), GAME_SIZE);
        }
        removed
    }

    /// Board click: unpick if picked, pick otherwise
    pub fn toggle(&mut self, value: u8) -> bool {
        if self.current.contains(value) {
            self.remove_candidate(value)
        } else {
            self.add_candidate(value)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_complete()
    }

    /// Replace the current game with a random complete one.
    ///
    /// Draws with replacement and lets the selection reject repeats.
    pub fn randomize(&mut self) {
        self.current.clear();
        while !self.current.is_complete() {
            let value = self.rng.random_range(MIN_NUMBER..=MAX_NUMBER);
            self.current.add(value);
        }
        log::debug!("Random game: {:?}", self.current.numbers());
    }

    /// Save the current game (sorted) and start a new one.
    ///
    /// Nothing changes if the game is incomplete or already saved.
    pub fn commit(&mut self) -> Result<CommittedGame, PickError> {
        let game = self
            .current
            .to_game()
            .ok_or(PickError::IncompleteSelection {
                picked: self.current.len(),
                required: GAME_SIZE,
            })?;

        self.saved.push(game)?;
        self.persist();
        self.current.clear();

        log::info!("Game saved: {} ({} total)", game, self.saved.len());
        Ok(game)
    }

    /// Drop every saved game. Confirmation is the caller's job.
    pub fn clear_saved_games(&mut self) {
        self.saved.clear();
        self.persist();
        log::info!("Saved games cleared");
    }

    /// Discard the current game
    pub fn new_game(&mut self) {
        self.current.clear();
    }

    fn persist(&mut self) {
        match self.saved.to_json() {
            Ok(json) => self.store.save(&self.storage_key, &json),
            Err(e) => log::warn!("Could not encode saved games: {}", e),
        }
    }
}
