//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::MAX_GUESSES;
use crate::game::{Game, GameError};
use crate::output::formatters::colored_guess;
use crate::output::{print_board, print_game_over};
use crate::wordlists::{Level, WordProvider};
use colored::Colorize;
use std::io::{self, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    NewGame,
    Hint,
    Keys,
    Level(Level),
    Guess(String),
}

impl Input {
    /// Parse a trimmed input line
    ///
    /// # Errors
    ///
    /// Returns a message if a `level` command names an unknown level.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let lower = line.to_lowercase();

        if let Some(key) = lower.strip_prefix("level ") {
            return key.parse().map(Self::Level).map_err(|e| format!("{e}"));
        }

        Ok(match lower.as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "hint" | "h" => Self::Hint,
            "keys" | "k" => Self::Keys,
            _ => Self::Guess(line.to_string()),
        })
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// game cannot be started.
pub fn run_simple<P: WordProvider>(game: &mut Game<P>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Simple Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter word in {MAX_GUESSES} tries.");
    println!("  - {} letter in the right spot", " G ".black().on_green());
    println!("  - {} letter in the word, wrong spot", " Y ".black().on_yellow());
    println!("  - {} letter not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'quit', 'new', 'hint', 'keys', 'level <key>'\n");

    print_title(game);

    loop {
        let session = game.session();
        let prompt = format!("Guess {}/{MAX_GUESSES}", session.current_row() + 1);

        let input = match Input::parse(&get_user_input(&prompt)?) {
            Ok(input) => input,
            Err(message) => {
                println!("❌ {message}\n");
                continue;
            }
        };

        match input {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::NewGame => {
                game.restart().map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
            }
            Input::Level(level) => {
                game.change_level(level).map_err(|e| e.to_string())?;
                print_title(game);
            }
            Input::Hint => match game.hint() {
                Some(hint) => println!(
                    "💡 Letter {} is {}\n",
                    hint.position + 1,
                    hint.letter.to_ascii_uppercase().to_string().bright_yellow().bold()
                ),
                None => println!("No hint available\n"),
            },
            Input::Keys => print_board(game.session()),
            Input::Guess(candidate) => {
                let result = match game.submit_guess(&candidate) {
                    Ok(result) => result,
                    Err(e @ (GameError::InvalidLength(_) | GameError::InvalidGuess(_))) => {
                        println!("❌ {e}\n");
                        continue;
                    }
                    Err(e) => return Err(e.to_string()),
                };

                print!("   {}", colored_guess(result.guess.word(), result.guess.feedback()));
                if let Some(definition) = game.definition(result.guess.word()) {
                    print!("  {}", definition.bright_black());
                }
                println!("\n");

                if result.status.is_over() {
                    print_game_over(game.session());

                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            game.restart().map_err(|e| e.to_string())?;
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

fn print_title<P: WordProvider>(game: &Game<P>) {
    println!("{}\n", game.level().title().bright_cyan().bold());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Input::parse("quit"), Ok(Input::Quit));
        assert_eq!(Input::parse(" N "), Ok(Input::NewGame));
        assert_eq!(Input::parse("hint"), Ok(Input::Hint));
        assert_eq!(Input::parse("keys"), Ok(Input::Keys));
    }

    #[test]
    fn parse_level_command() {
        assert_eq!(
            Input::parse("level eiken-pre2"),
            Ok(Input::Level(Level::EikenPre2))
        );
        assert!(Input::parse("level toeic").is_err());
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(Input::parse("Crane"), Ok(Input::Guess("Crane".to_string())));
        assert_eq!(Input::parse("ab"), Ok(Input::Guess("ab".to_string())));
    }
}
