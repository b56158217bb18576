//! Display functions for command results

use super::formatters::{colored_guess, keyboard_lines, plural_guesses};
use crate::commands::{CheckResult, DefineResult, LevelSummary};
use crate::game::{GameStatus, Session};
use colored::Colorize;

/// Print the level listing
pub fn print_levels(levels: &[LevelSummary]) {
    println!("\n{}", "═".repeat(48).cyan());
    println!(" {} ", "LEVELS".bright_cyan().bold());
    println!("{}", "═".repeat(48).cyan());

    for summary in levels {
        let marker = if summary.selected { "▶" } else { " " };
        println!(
            " {} {:<12} {:<14} {:>3} words",
            marker.bright_yellow(),
            summary.level.key().bright_white().bold(),
            summary.level.label(),
            summary.word_count
        );
    }
    println!();
}

/// Print a single evaluated guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("\n  {}", colored_guess(&result.guess, &result.feedback));
    println!("  {}\n", result.feedback.to_emoji());

    let statuses: Vec<&str> = result
        .feedback
        .statuses()
        .iter()
        .map(|s| s.as_str())
        .collect();
    println!("  {}", statuses.join(" ").bright_black());
    println!(
        "  {} correct, {} present\n",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );

    for line in keyboard_lines(&result.keyboard) {
        println!("  {line}");
    }
    println!();
}

/// Print a dictionary lookup
pub fn print_definition(result: &DefineResult) {
    let word = result.word.text().to_uppercase();
    match &result.definition {
        Some(definition) => println!(
            "\n{} ({}): {}\n",
            word.bright_white().bold(),
            result.level.label().cyan(),
            definition
        ),
        None => println!(
            "\n{} is not in the {} word list\n",
            word.bright_white().bold(),
            result.level.label().cyan()
        ),
    }
}

/// Print the board so far: guessed rows then the keyboard
pub fn print_board(session: &Session) {
    println!();
    for (i, guess) in session.guesses().iter().enumerate() {
        println!(
            "  {} {}",
            (i + 1).to_string().bright_black(),
            colored_guess(guess.word(), guess.feedback())
        );
    }
    println!();
    for line in keyboard_lines(session.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner with the answer and its definition
pub fn print_game_over(session: &Session) {
    let target = session.target();
    let answer = target.word().text().to_uppercase();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            let count = session.current_row();
            println!(
                "{}",
                format!("  🎉 Solved in {count} {}!", plural_guesses(count))
                    .bright_green()
                    .bold()
            );
        }
        GameStatus::Lost => {
            println!("{}", "  ❌ Out of guesses".red().bold());
        }
        GameStatus::Playing => {}
    }
    println!("\n  The word was {}", answer.bright_yellow().bold());
    if !target.definition().is_empty() {
        println!("  {}", target.definition().italic());
    }

    println!("\n  Guess history:");
    for (i, guess) in session.guesses().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.word().text().to_uppercase().bright_white().bold(),
            guess.feedback().to_emoji()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());
    println!();
}
