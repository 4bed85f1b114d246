//! The in-progress game

use super::game::CommittedGame;
use crate::consts::GAME_SIZE;
use crate::in_domain;

/// Numbers chosen for the current game, in the order they were picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    numbers: Vec<u8>,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            numbers: Vec::with_capacity(GAME_SIZE),
        }
    }

    /// Add a number. Returns false (and changes nothing) if the number is off
    /// the board, already picked, or the game is full.
    pub fn add(&mut self, value: u8) -> bool {
        if !in_domain(value) || self.contains(value) || self.is_complete() {
            return false;
        }
        self.numbers.push(value);
        true
    }

    /// Remove a number, keeping the order of the rest. Returns false if it
    /// was not picked.
    pub fn remove(&mut self, value: u8) -> bool {
        if !in_domain(value) {
            return false;
        }
        let before = self.numbers.len();
        self.numbers.retain(|&n| n != value);
        self.numbers.len() != before
    }

    /// Remove if picked, otherwise add
    pub fn toggle(&mut self, value: u8) -> bool {
        if self.contains(value) {
            self.remove(value)
        } else {
            self.add(value)
        }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.numbers.contains(&value)
    }

    /// True once all numbers of a game have been picked
    pub fn is_complete(&self) -> bool {
        self.numbers.len() == GAME_SIZE
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    /// Picked numbers in insertion order
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// Picked numbers in ascending order
    pub fn sorted(&self) -> Vec<u8> {
        let mut sorted = self.numbers.clone();
        sorted.sort_unstable();
        sorted
    }

    /// The finished game, once complete
    pub fn to_game(&self) -> Option<CommittedGame> {
        if !self.is_complete() {
            return None;
        }
        CommittedGame::from_numbers(&self.numbers).ok()
    }
}
