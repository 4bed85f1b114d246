//! Committed games and the saved-games list
//!
//! Stored as JSON: an array of six-number arrays, e.g. `[[1,2,3,4,5,6]]`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{GAME_SIZE, MAX_NUMBER, MIN_NUMBER};
use crate::error::{GameFormatError, PickError};

/// A finished game: six distinct board numbers in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>")]
pub struct CommittedGame([u8; GAME_SIZE]);

impl CommittedGame {
    /// Build a game from any ordering of valid numbers
    pub fn from_numbers(numbers: &[u8]) -> Result<Self, GameFormatError> {
        if numbers.len() != GAME_SIZE {
            return Err(GameFormatError::WrongCount {
                expected: GAME_SIZE,
                found: numbers.len(),
            });
        }

        let mut sorted = [0u8; GAME_SIZE];
        sorted.copy_from_slice(numbers);
        sorted.sort_unstable();

        if let Some(&bad) = sorted.iter().find(|&&n| !crate::in_domain(n)) {
            return Err(GameFormatError::OutOfRange(i64::from(bad)));
        }
        if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(GameFormatError::Repeated(pair[0]));
        }

        Ok(Self(sorted))
    }

    pub fn numbers(&self) -> &[u8; GAME_SIZE] {
        &self.0
    }
}

impl TryFrom<Vec<i64>> for CommittedGame {
    type Error = GameFormatError;

    fn try_from(raw: Vec<i64>) -> Result<Self, Self::Error> {
        let range = i64::from(MIN_NUMBER)..=i64::from(MAX_NUMBER);
        let numbers = raw
            .iter()
            .map(|&n| {
                if range.contains(&n) {
                    Ok(n as u8)
                } else {
                    Err(GameFormatError::OutOfRange(n))
                }
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::from_numbers(&numbers)
    }
}

impl fmt::Display for CommittedGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

/// Saved games, oldest first. Never holds the same game twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SavedGames {
    games: Vec<CommittedGame>,
}

impl SavedGames {
    pub fn new() -> Self {
        Self { games: Vec::new() }
    }

    /// Append a game unless an equal one is already saved
    pub fn push(&mut self, game: CommittedGame) -> Result<(), PickError> {
        if self.contains(&game) {
            return Err(PickError::DuplicateGame(game));
        }
        self.games.push(game);
        Ok(())
    }

    pub fn contains(&self, game: &CommittedGame) -> bool {
        self.games.contains(game)
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn as_slice(&self) -> &[CommittedGame] {
        &self.games
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommittedGame> {
        self.games.iter()
    }

    /// Encode for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode from storage, dropping anything that isn't a valid, unique game.
    /// Unreadable data yields an empty list.
    pub fn from_json(json: &str) -> Self {
        let entries: Vec<serde_json::Value> = match serde_json::from_str(json) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Discarding unreadable saved games: {}", e);
                return Self::new();
            }
        };

        let mut saved = Self::new();
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<CommittedGame>(entry) {
                Ok(game) => {
                    if saved.push(game).is_err() {
                        log::warn!("Dropping repeated saved game #{}: {}", index, game);
                    }
                }
                Err(e) => log::warn!("Dropping invalid saved game #{}: {}", index, e),
            }
        }
        saved
    }
}
