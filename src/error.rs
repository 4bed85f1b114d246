//! Error types

use thiserror::Error;

use crate::engine::CommittedGame;

/// Failures reported by engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    /// Save attempted before all numbers were chosen
    #[error("game is incomplete: {picked} of {required} numbers chosen")]
    IncompleteSelection { picked: usize, required: usize },
    /// Save attempted for a game that is already in the saved list
    #[error("game {0} has already been saved")]
    DuplicateGame(CommittedGame),
}

/// Reasons a list of numbers is not a valid committed game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameFormatError {
    #[error("expected {expected} numbers, found {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("number {0} is outside the board")]
    OutOfRange(i64),
    #[error("number {0} appears more than once")]
    Repeated(u8),
}
