//! Turn management for a game of Wordle
//!
//! `Session` holds one round's state; `Game` owns the word provider and
//! replaces the session whenever a new game or level is requested.

mod controller;
mod error;
mod session;

pub use controller::Game;
pub use error::GameError;
pub use session::{GameStatus, Guess, Hint, Session, SubmitResult};
