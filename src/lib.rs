//! Wordle Levels
//!
//! A Wordle-style word game with word pools for Japanese junior high school
//! years and Eiken proficiency grades.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_levels::game::{Game, GameStatus};
//! use wordle_levels::wordlists::{Level, WordPool};
//!
//! let mut game = Game::new(WordPool::embedded_seeded(1), Level::Jhs1).unwrap();
//! let answer = game.session().target().word().text().to_string();
//!
//! let result = game.submit_guess(&answer).unwrap();
//! assert_eq!(result.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Turn management
pub mod game;

// Word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
