//! Single guess evaluation command
//!
//! Evaluates one guess against a given target without starting a game.

use crate::core::{Feedback, InvalidGuessError, KeyboardState, Word};

/// Result of checking one guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
    pub keyboard: KeyboardState,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns `InvalidGuessError` if either word is not 5 letters.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, InvalidGuessError> {
    let parse = |input: &str| {
        Word::new(input).map_err(|reason| InvalidGuessError {
            input: input.to_string(),
            reason,
        })
    };
    let guess = parse(guess)?;
    let target = parse(target)?;
    let feedback = Feedback::evaluate(&guess, &target);

    let mut keyboard = KeyboardState::new();
    keyboard.record(&guess, &feedback);

    Ok(CheckResult {
        guess,
        target,
        feedback,
        keyboard,
    })
}
