//! Errors surfaced by the turn manager

use super::GameStatus;
use crate::core::{WORD_LENGTH, WordError};
use crate::wordlists::EmptyPoolError;
use std::fmt;

/// Error type for game operations
///
/// Every variant except `EmptyPool` leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Candidate is not exactly `WORD_LENGTH` characters
    InvalidLength(usize),
    /// Candidate has the right length but is not made of letters
    InvalidGuess(WordError),
    /// The game already ended
    GameOver(GameStatus),
    /// No target could be chosen for the level
    EmptyPool(EmptyPoolError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(_) => write!(f, "Word must be {WORD_LENGTH} letters long"),
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::GameOver(status) => write!(f, "Game is over ({status})"),
            Self::EmptyPool(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(e) => Some(e),
            Self::EmptyPool(e) => Some(e),
            Self::InvalidLength(_) | Self::GameOver(_) => None,
        }
    }
}

impl From<EmptyPoolError> for GameError {
    fn from(e: EmptyPoolError) -> Self {
        Self::EmptyPool(e)
    }
}
