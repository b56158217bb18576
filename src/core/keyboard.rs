//! Keyboard status aggregation
//!
//! Tracks the best-known status of every letter across all guesses in a game.
//! A key's status only ever moves up the `Absent < Present < Correct` order.

use super::{Feedback, LetterStatus, Word};

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Aggregated per-letter status for the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState([Option<LetterStatus>; 26]);

impl KeyboardState {
    #[must_use]
    pub const fn new() -> Self {
        Self([None; 26])
    }

    fn index(letter: u8) -> Option<usize> {
        let letter = letter.to_ascii_lowercase();
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }

    /// Current status of a letter, `None` if it has not been guessed
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterStatus> {
        Self::index(letter).and_then(|i| self.0[i])
    }

    /// Record a status for a letter, never downgrading
    ///
    /// Returns `true` if the displayed status changed. Non-letters are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_levels::core::{KeyboardState, LetterStatus};
    ///
    /// let mut keyboard = KeyboardState::new();
    /// assert!(keyboard.update(b'e', LetterStatus::Correct));
    /// assert!(!keyboard.update(b'e', LetterStatus::Absent));
    /// assert_eq!(keyboard.status(b'e'), Some(LetterStatus::Correct));
    /// ```
    pub fn update(&mut self, letter: u8, status: LetterStatus) -> bool {
        let Some(i) = Self::index(letter) else {
            return false;
        };
        let slot = &mut self.0[i];
        if slot.is_none_or(|current| status > current) {
            *slot = Some(status);
            true
        } else {
            false
        }
    }

    /// Fold one evaluated guess into the keyboard
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
            self.update(letter, status);
        }
    }

    /// Iterate over the letters that have a status, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        (b'a'..=b'z')
            .zip(self.0.iter())
            .filter_map(|(letter, status)| status.map(|s| (char::from(letter), s)))
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    #[test]
    fn new_keyboard_is_unset() {
        let keyboard = KeyboardState::new();
        assert!(
            KEYBOARD_ROWS
                .iter()
                .flat_map(|row| row.bytes())
                .all(|k| keyboard.status(k).is_none())
        );
        assert_eq!(keyboard.iter().count(), 0);
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<u8> = KEYBOARD_ROWS.iter().flat_map(|row| row.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
    }

    #[test]
    fn update_is_idempotent() {
        let mut once = KeyboardState::new();
        once.update(b'r', Present);

        let mut twice = KeyboardState::new();
        twice.update(b'r', Present);
        assert!(!twice.update(b'r', Present));

        assert_eq!(once, twice);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardState::new();
        keyboard.update(b'a', Correct);
        keyboard.update(b'a', Present);
        keyboard.update(b'a', Absent);
        assert_eq!(keyboard.status(b'a'), Some(Correct));
    }

    #[test]
    fn upgrades_follow_information_order() {
        let mut keyboard = KeyboardState::new();
        assert!(keyboard.update(b'n', Absent));
        assert!(keyboard.update(b'n', Present));
        assert!(keyboard.update(b'n', Correct));
        assert_eq!(keyboard.status(b'n'), Some(Correct));
    }

    #[test]
    fn update_is_case_insensitive_and_ignores_non_letters() {
        let mut keyboard = KeyboardState::new();
        assert!(keyboard.update(b'Q', Present));
        assert_eq!(keyboard.status(b'q'), Some(Present));
        assert!(!keyboard.update(b'1', Correct));
        assert_eq!(keyboard.status(b'1'), None);
    }

    #[test]
    fn record_keeps_best_status_for_repeated_letters() {
        // SPEED vs CREPE: first E correct, second E present
        let guess = Word::new("speed").unwrap();
        let target = Word::new("crepe").unwrap();
        let feedback = Feedback::evaluate(&guess, &target);

        let mut keyboard = KeyboardState::new();
        keyboard.record(&guess, &feedback);

        assert_eq!(keyboard.status(b'e'), Some(Correct));
        assert_eq!(keyboard.status(b'p'), Some(Present));
        assert_eq!(keyboard.status(b's'), Some(Absent));
        assert_eq!(keyboard.status(b'd'), Some(Absent));
    }

    #[test]
    fn iter_is_alphabetical() {
        let mut keyboard = KeyboardState::new();
        keyboard.update(b'z', Absent);
        keyboard.update(b'c', Correct);

        let known: Vec<_> = keyboard.iter().collect();
        assert_eq!(known, vec![('c', Correct), ('z', Absent)]);
    }
}
