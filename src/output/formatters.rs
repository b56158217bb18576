//! Formatting utilities for terminal output

use crate::core::{Feedback, KEYBOARD_ROWS, KeyboardState, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// Tile text for one letter, e.g. " A "
#[must_use]
pub fn tile_text(letter: u8) -> String {
    format!(" {} ", char::from(letter.to_ascii_uppercase()))
}

/// Color a tile by status; unset tiles stay plain
#[must_use]
pub fn colored_tile(letter: u8, status: Option<LetterStatus>) -> ColoredString {
    let text = tile_text(letter);
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A guessed word as a row of colored tiles
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| colored_tile(letter, Some(status)).to_string())
        .collect()
}

/// On-screen keyboard rows, each key colored by its aggregated status
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|k| colored_tile(k, keyboard.status(k)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Guess count in words
#[must_use]
pub fn plural_guesses(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_text_is_uppercase_and_padded() {
        assert_eq!(tile_text(b'a'), " A ");
        assert_eq!(tile_text(b'Z'), " Z ");
    }

    #[test]
    fn keyboard_has_three_indented_rows() {
        let lines = keyboard_lines(&KeyboardState::new());
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("  "));
        assert!(lines[2].starts_with("    "));
        assert!(lines[0].contains(" Q "));
    }

    #[test]
    fn plural() {
        assert_eq!(plural_guesses(1), "guess");
        assert_eq!(plural_guesses(3), "guesses");
    }
}
