//! Core domain types for the game
//!
//! Words, guess evaluation and keyboard aggregation. Everything here is pure
//! and synchronous; no I/O and no randomness.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, InvalidGuessError, LetterStatus};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use word::{Word, WordError};

/// Number of letters in every guess and target
pub const WORD_LENGTH: usize = 5;

/// Number of rows on the board
pub const MAX_GUESSES: usize = 6;
