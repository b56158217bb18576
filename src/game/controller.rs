//! Game controller
//!
//! Owns the word provider and the single active session. Front ends hold one
//! `Game` and drive everything through it.

use super::{GameError, GameStatus, Hint, Session, SubmitResult};
use crate::core::Word;
use crate::wordlists::{EmptyPoolError, Level, WordPool, WordProvider};

/// Application context for one player
pub struct Game<P: WordProvider = WordPool> {
    provider: P,
    session: Session,
}

impl<P: WordProvider> Game<P> {
    /// Start the first game at `level`
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the level has no words.
    pub fn new(mut provider: P, level: Level) -> Result<Self, EmptyPoolError> {
        let session = Session::start(&mut provider, level)?;
        provider.set_level(level);
        log_new_game(&session);
        Ok(Self { provider, session })
    }

    /// Replace the session with a fresh game at `level`
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the level has no words; the current
    /// session is kept in that case.
    pub fn start_new_game(&mut self, level: Level) -> Result<(), EmptyPoolError> {
        let session = Session::start(&mut self.provider, level)?;
        self.provider.set_level(level);
        self.session = session;
        log_new_game(&self.session);
        Ok(())
    }

    /// Fresh game at the current level
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the level has no words.
    pub fn restart(&mut self) -> Result<(), EmptyPoolError> {
        self.start_new_game(self.session.level())
    }

    /// Switch to another level and start a game there
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the level has no words.
    pub fn change_level(&mut self, level: Level) -> Result<(), EmptyPoolError> {
        tracing::info!(
            from = self.session.level().key(),
            to = level.key(),
            "Changing level"
        );
        self.start_new_game(level)
    }

    /// Submit a guess to the active session
    ///
    /// # Errors
    /// See [`Session::submit_guess`].
    pub fn submit_guess(&mut self, candidate: &str) -> Result<SubmitResult, GameError> {
        let result = self.session.submit_guess(candidate)?;
        match result.status {
            GameStatus::Won => tracing::info!(
                level = self.session.level().key(),
                guesses = result.current_row,
                "Game won"
            ),
            GameStatus::Lost => tracing::info!(
                level = self.session.level().key(),
                answer = self.session.target().word().text(),
                "Game lost"
            ),
            GameStatus::Playing => {}
        }
        Ok(result)
    }

    /// Definition of any word in the current level's pool
    #[must_use]
    pub fn definition(&self, word: &Word) -> Option<&str> {
        self.provider.definition(word, self.session.level())
    }

    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        self.session.hint()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.session.level()
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

fn log_new_game(session: &Session) {
    tracing::debug!(
        level = session.level().key(),
        answer = session.target().word().text(),
        "New game started"
    );
}
