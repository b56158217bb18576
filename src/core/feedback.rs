//! Guess evaluation and per-letter feedback
//!
//! Each letter of a guess is classified against the target word:
//! - `Correct` = letter in the right position
//! - `Present` = letter in the word, wrong position
//! - `Absent`  = letter not in the word (or all its occurrences already used)

use super::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// Status of a single guessed letter
///
/// Ordered by how much it tells the player: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Lowercase name, as used for tile and key styling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for malformed evaluator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidGuessError {
    pub input: String,
    pub reason: WordError,
}

impl fmt::Display for InvalidGuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid guess '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidGuessError {}

/// Feedback for one guess: one status per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Evaluate `guess` against `target`
    ///
    /// Duplicate letters are never double counted.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark presence matches from what remains in the pool
    ///
    /// # Examples
    /// ```
    /// use wordle_levels::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.statuses(), &[Present, Absent, Present, Present, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();
        let guess_chars = guess.chars();
        let target_chars = target.chars();

        for (i, status) in result.iter_mut().enumerate() {
            if guess_chars[i] == target_chars[i] {
                *status = LetterStatus::Correct;
                if let Some(count) = available.get_mut(&guess_chars[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, status) in result.iter_mut().enumerate() {
            if *status == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess_chars[i])
                && *count > 0
            {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Evaluate raw strings, case-insensitively
    ///
    /// # Errors
    /// Returns `InvalidGuessError` if either string is not a valid 5-letter word.
    pub fn evaluate_str(guess: &str, target: &str) -> Result<Self, InvalidGuessError> {
        let parse = |input: &str| {
            Word::new(input).map_err(|reason| InvalidGuessError {
                input: input.to_string(),
                reason,
            })
        };
        Ok(Self::evaluate(&parse(guess)?, &parse(target)?))
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, wanted: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == wanted).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}
