//! Wordle Levels - CLI
//!
//! Wordle game with TUI and CLI modes, one word pool per school or Eiken level.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_levels::{
    commands::{check_guess, define_word, list_levels, run_simple},
    game::Game,
    output::{print_check_result, print_definition, print_levels},
    wordlists::{Level, WordPool, WordProvider, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_levels",
    about = "Wordle with word pools for JHS years and Eiken grades",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Level: jhs1-jhs3, eiken5, eiken4, eiken3, eiken-pre2, eiken2, eiken-pre1, eiken1
    #[arg(short, long, global = true, default_value = "jhs1")]
    level: Level,

    /// Replace the selected level's words with a TSV file (word<TAB>definition)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for reproducible word selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// List the available levels
    Levels,

    /// Evaluate a guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Look up a word's definition in the selected level
    Define {
        /// Word to look up
        word: String,
    },
}

/// Build the word pool from the -w and --seed flags
fn load_pool(cli: &Cli) -> Result<WordPool> {
    let mut pool = match cli.seed {
        Some(seed) => WordPool::embedded_seeded(seed),
        None => WordPool::embedded(),
    };

    if let Some(path) = &cli.wordlist {
        let entries = load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        pool.replace_level(cli.level, entries);
    }
    pool.set_level(cli.level);

    Ok(pool)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wordle_levels=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let pool = load_pool(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(pool, cli.level),
        Commands::Simple => run_simple_command(pool, cli.level),
        Commands::Levels => {
            print_levels(&list_levels(&pool));
            Ok(())
        }
        Commands::Check { guess, target } => {
            let result = check_guess(&guess, &target)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Define { word } => {
            let result = define_word(&pool, &word, cli.level)?;
            print_definition(&result);
            Ok(())
        }
    }
}

fn run_simple_command(pool: WordPool, level: Level) -> Result<()> {
    let mut game = Game::new(pool, level)?;
    run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(pool: WordPool, level: Level) -> Result<()> {
    use wordle_levels::interactive::{App, run_tui};

    let game = Game::new(pool, level)?;
    run_tui(App::new(game))
}
