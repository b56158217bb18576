//! Session state and turn management
//!
//! A `Session` is one round: a target word, the guesses made against it and
//! the aggregated keyboard. It is created by starting a game and is only
//! mutated by submitting guesses. A new game replaces it with a fresh one.

use super::GameError;
use crate::core::{Feedback, KeyboardState, LetterStatus, MAX_GUESSES, WORD_LENGTH, Word};
use crate::wordlists::{EmptyPoolError, Level, WordEntry, WordProvider};
use std::fmt;

/// Outcome status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// One submitted guess with its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Everything the UI needs to render one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub guess: Guess,
    pub keyboard: KeyboardState,
    pub status: GameStatus,
    pub current_row: usize,
    /// The target, revealed only once the game has ended
    pub target: Option<WordEntry>,
}

/// A revealed letter of the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub position: usize,
    pub letter: char,
}

/// State of the active game
#[derive(Debug, Clone)]
pub struct Session {
    level: Level,
    target: WordEntry,
    guesses: Vec<Guess>,
    status: GameStatus,
    keyboard: KeyboardState,
}

impl Session {
    /// Fresh session against a known target
    #[must_use]
    pub fn new(level: Level, target: WordEntry) -> Self {
        Self {
            level,
            target,
            guesses: Vec::with_capacity(MAX_GUESSES),
            status: GameStatus::Playing,
            keyboard: KeyboardState::new(),
        }
    }

    /// Fresh session with a random target from the provider
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the level has no words.
    pub fn start<P: WordProvider + ?Sized>(
        provider: &mut P,
        level: Level,
    ) -> Result<Self, EmptyPoolError> {
        let target = provider.random_word(level)?;
        Ok(Self::new(level, target))
    }

    /// Submit a candidate word
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game is won or lost
    /// - `GameError::InvalidLength` if the trimmed candidate is not 5 characters
    /// - `GameError::InvalidGuess` if it contains anything but letters
    ///
    /// The session is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use wordle_levels::core::Word;
    /// use wordle_levels::game::{GameStatus, Session};
    /// use wordle_levels::wordlists::{Level, WordEntry};
    ///
    /// let target = WordEntry::new(Word::new("crane").unwrap(), "a large bird");
    /// let mut session = Session::new(Level::Jhs1, target);
    ///
    /// let result = session.submit_guess("CRANE").unwrap();
    /// assert_eq!(result.status, GameStatus::Won);
    /// assert_eq!(result.target.unwrap().definition(), "a large bird");
    /// ```
    pub fn submit_guess(&mut self, candidate: &str) -> Result<SubmitResult, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        let candidate = candidate.trim();
        let length = candidate.chars().count();
        if length != WORD_LENGTH {
            return Err(GameError::InvalidLength(length));
        }

        let word = Word::new(candidate).map_err(GameError::InvalidGuess)?;
        let feedback = Feedback::evaluate(&word, self.target.word());

        self.keyboard.record(&word, &feedback);
        let guess = Guess { word, feedback };
        self.guesses.push(guess.clone());

        if guess.feedback.is_perfect() {
            self.status = GameStatus::Won;
        } else if self.current_row() >= MAX_GUESSES {
            self.status = GameStatus::Lost;
        }

        Ok(SubmitResult {
            guess,
            keyboard: self.keyboard,
            status: self.status,
            current_row: self.current_row(),
            target: self.status.is_over().then(|| self.target.clone()),
        })
    }

    /// Reveal the target letter at the first position no guess has solved
    ///
    /// Returns `None` once the game is over or every position is solved.
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        if self.status.is_over() {
            return None;
        }
        (0..WORD_LENGTH)
            .find(|&position| {
                !self
                    .guesses
                    .iter()
                    .any(|g| g.feedback.status_at(position) == LetterStatus::Correct)
            })
            .map(|position| Hint {
                position,
                letter: char::from(self.target.word().char_at(position)),
            })
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub const fn target(&self) -> &WordEntry {
        &self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Index of the next row to fill; equals the number of guesses made
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.current_row()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;
    use crate::core::WordError;

    fn session(target: &str) -> Session {
        Session::new(
            Level::Jhs1,
            WordEntry::new(Word::new(target).unwrap(), "definition"),
        )
    }

    #[test]
    fn new_session_is_playing() {
        let s = session("crane");
        assert_eq!(s.status(), GameStatus::Playing);
        assert_eq!(s.current_row(), 0);
        assert_eq!(s.remaining_guesses(), MAX_GUESSES);
        assert_eq!(s.keyboard(), &KeyboardState::new());
    }

    #[test]
    fn partial_guess_then_win() {
        let mut s = session("crane");

        let first = s.submit_guess("trace").unwrap();
        assert_eq!(first.status, GameStatus::Playing);
        assert_eq!(first.current_row, 1);
        assert_eq!(
            first.guess.feedback().statuses(),
            &[Absent, Correct, Correct, Present, Correct]
        );
        assert!(first.target.is_none());

        let second = s.submit_guess("crane").unwrap();
        assert!(second.guess.feedback().is_perfect());
        assert_eq!(second.status, GameStatus::Won);
        assert_eq!(second.current_row, 2);
        assert_eq!(s.current_row(), 2);
        assert_eq!(second.target.unwrap().word().text(), "crane");
    }

    #[test]
    fn six_misses_lose() {
        let mut s = session("crane");
        let misses = ["apple", "house", "music", "water", "sleep", "piano"];

        for (i, miss) in misses.iter().enumerate() {
            let result = s.submit_guess(miss).unwrap();
            assert_eq!(result.current_row, i + 1);
            if i + 1 < MAX_GUESSES {
                assert_eq!(result.status, GameStatus::Playing);
            } else {
                assert_eq!(result.status, GameStatus::Lost);
                assert!(result.target.is_some());
            }
        }

        assert_eq!(
            s.submit_guess("crane"),
            Err(GameError::GameOver(GameStatus::Lost))
        );
        assert_eq!(s.current_row(), MAX_GUESSES);
        assert_eq!(s.status(), GameStatus::Lost);
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut s = session("crane");
        for miss in ["apple", "house", "music", "water", "sleep"] {
            s.submit_guess(miss).unwrap();
        }
        assert_eq!(s.submit_guess("crane").unwrap().status, GameStatus::Won);
    }

    #[test]
    fn wrong_length_leaves_session_unchanged() {
        let mut s = session("crane");
        s.submit_guess("trace").unwrap();
        let keyboard = *s.keyboard();

        assert_eq!(s.submit_guess("ab"), Err(GameError::InvalidLength(2)));
        assert_eq!(s.submit_guess("cranes"), Err(GameError::InvalidLength(6)));
        assert_eq!(s.current_row(), 1);
        assert_eq!(s.keyboard(), &keyboard);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let mut s = session("crane");
        assert_eq!(s.submit_guess(" ab  "), Err(GameError::InvalidLength(2)));
        assert_eq!(s.current_row(), 0);

        let result = s.submit_guess("crane ").unwrap();
        assert_eq!(result.status, GameStatus::Won);
    }

    #[test]
    fn non_ascii_letters_rejected_before_lowercasing() {
        let mut s = session("crane");
        assert_eq!(
            s.submit_guess("İcrne"),
            Err(GameError::InvalidGuess(WordError::NonAscii))
        );
        assert_eq!(s.current_row(), 0);
    }

    #[test]
    fn non_letters_rejected() {
        let mut s = session("crane");
        assert!(matches!(
            s.submit_guess("cr4ne"),
            Err(GameError::InvalidGuess(_))
        ));
        assert_eq!(s.current_row(), 0);
    }

    #[test]
    fn guesses_after_win_are_rejected() {
        let mut s = session("crane");
        s.submit_guess("crane").unwrap();
        assert_eq!(
            s.submit_guess("trace"),
            Err(GameError::GameOver(GameStatus::Won))
        );
        assert_eq!(s.guesses().len(), 1);
    }

    #[test]
    fn keyboard_aggregates_across_guesses() {
        let mut s = session("crane");
        s.submit_guess("trace").unwrap();
        // Second guess has C in the right place and R out of place
        let result = s.submit_guess("cider").unwrap();

        assert_eq!(result.keyboard.status(b'c'), Some(Correct));
        assert_eq!(result.keyboard.status(b'r'), Some(Correct));
        assert_eq!(result.keyboard.status(b't'), Some(Absent));
        assert_eq!(result.keyboard.status(b'e'), Some(Correct));
        assert_eq!(result.keyboard.status(b'z'), None);
    }

    #[test]
    fn hint_reveals_first_unsolved_position() {
        let mut s = session("crane");
        assert_eq!(
            s.hint(),
            Some(Hint {
                position: 0,
                letter: 'c'
            })
        );

        s.submit_guess("trace").unwrap();
        assert_eq!(s.hint().map(|h| h.position), Some(0));

        s.submit_guess("chart").unwrap();
        assert_eq!(
            s.hint(),
            Some(Hint {
                position: 3,
                letter: 'n'
            })
        );

        s.submit_guess("crane").unwrap();
        assert_eq!(s.hint(), None);
    }
}
