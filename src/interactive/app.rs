//! TUI application state and logic

use crate::core::{Feedback, LetterStatus, MAX_GUESSES, WORD_LENGTH, Word};
use crate::game::{Game, GameStatus, Hint};
use crate::wordlists::{Level, WordPool, WordProvider};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<P: WordProvider = WordPool> {
    pub game: Game<P>,
    pub input_buffer: String,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub level_cursor: usize,
    pub hint: Option<Hint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
    LevelSelect,
}

/// A submitted guess as shown in the history panel
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub word: Word,
    pub feedback: Feedback,
    pub definition: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Games played since the program started
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<P: WordProvider> App<P> {
    #[must_use]
    pub fn new(game: Game<P>) -> Self {
        let level_cursor = game.level().index();
        Self {
            game,
            input_buffer: String::new(),
            history: Vec::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Tab to change level.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            level_cursor,
            hint: None,
        }
    }

    pub fn add_letter(&mut self, letter: char) {
        if self.input_mode != InputMode::Guessing || self.input_buffer.len() >= WORD_LENGTH {
            return;
        }
        if letter.is_ascii_alphabetic() {
            self.input_buffer.push(letter.to_ascii_lowercase());
        }
    }

    pub fn remove_letter(&mut self) {
        if self.input_mode == InputMode::Guessing {
            self.input_buffer.pop();
        }
    }

    pub fn submit_guess(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let result = match self.game.submit_guess(&self.input_buffer) {
            Ok(result) => result,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let definition = self
            .game
            .definition(result.guess.word())
            .map(str::to_string);
        self.history.push(HistoryEntry {
            word: result.guess.word().clone(),
            feedback: *result.guess.feedback(),
            definition,
        });
        self.input_buffer.clear();
        if self.hint.is_some_and(|hint| {
            result.guess.feedback().status_at(hint.position) == LetterStatus::Correct
        }) {
            self.hint = None;
        }

        match result.status {
            GameStatus::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.guess_distribution[result.current_row] += 1;

                let celebration = match result.current_row {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.finish_game();
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                let answer = self.game.session().target().word().text().to_uppercase();
                self.add_message(
                    &format!("Out of guesses! The word was {answer}"),
                    MessageStyle::Error,
                );
                self.finish_game();
            }
            GameStatus::Playing => {
                let remaining = self.game.session().remaining_guesses();
                self.add_message(
                    &format!("{remaining} guesses remaining"),
                    MessageStyle::Info,
                );
            }
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.add_message(
            "Press 'n' for new game, 'l' to change level or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    fn reset_board(&mut self) {
        self.history.clear();
        self.input_buffer.clear();
        self.hint = None;
        self.input_mode = InputMode::Guessing;
        self.level_cursor = self.game.level().index();
    }

    pub fn new_game(&mut self) {
        match self.game.restart() {
            Ok(()) => {
                self.reset_board();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn select_level(&mut self, level: Level) {
        match self.game.change_level(level) {
            Ok(()) => {
                self.reset_board();
                self.messages.clear();
                self.add_message(
                    &format!("Now playing {}", level.title()),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.close_level_select();
            }
        }
    }

    pub fn open_level_select(&mut self) {
        self.level_cursor = self.game.level().index();
        self.input_mode = InputMode::LevelSelect;
    }

    fn close_level_select(&mut self) {
        self.input_mode = if self.game.session().status().is_over() {
            InputMode::GameOver
        } else {
            InputMode::Guessing
        };
    }

    fn move_level_cursor(&mut self, up: bool) {
        let count = Level::ALL.len();
        self.level_cursor = if up {
            (self.level_cursor + count - 1) % count
        } else {
            (self.level_cursor + 1) % count
        };
    }

    pub fn show_hint(&mut self) {
        if let Some(hint) = self.game.hint() {
            self.hint = Some(hint);
            self.add_message(
                &format!(
                    "Hint: letter {} is {}",
                    hint.position + 1,
                    hint.letter.to_ascii_uppercase()
                ),
                MessageStyle::Info,
            );
        } else {
            self.add_message("No hint available!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::LevelSelect => match key.code {
                KeyCode::Up => self.move_level_cursor(true),
                KeyCode::Down => self.move_level_cursor(false),
                KeyCode::Enter => {
                    let level = Level::ALL[self.level_cursor];
                    self.select_level(level);
                }
                KeyCode::Esc | KeyCode::Tab => self.close_level_select(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('l') | KeyCode::Tab => self.open_level_select(),
                _ => {
                    // Board is frozen until a new game starts
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('n') if ctrl => self.new_game(),
                KeyCode::Char('h') if ctrl => self.show_hint(),
                KeyCode::Char('?') => self.show_hint(),
                KeyCode::Char(c) => self.add_letter(c),
                KeyCode::Backspace | KeyCode::Delete => self.remove_letter(),
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Tab => self.open_level_select(),
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: WordProvider>(app: App<P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, P: WordProvider>(
    terminal: &mut Terminal<B>,
    mut app: App<P>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App {
        let mut pool = WordPool::new(StdRng::seed_from_u64(5));
        pool.replace_level(
            Level::Jhs1,
            vec![WordEntry::new(Word::new("crane").unwrap(), "a large bird")],
        );
        pool.replace_level(
            Level::Eiken3,
            vec![WordEntry::new(Word::new("topic").unwrap(), "a subject")],
        );
        App::new(Game::new(pool, Level::Jhs1).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn hint_clears_once_its_position_is_solved() {
        let mut app = app();
        app.show_hint();
        assert_eq!(app.hint.map(|h| h.letter), Some('c'));

        type_word(&mut app, "trace");
        assert!(app.hint.is_some());

        type_word(&mut app, "chart");
        assert_eq!(app.hint, None);
    }

    #[test]
    fn typing_caps_at_word_length() {
        let mut app = app();
        for c in "CRANES".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "crane");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "cran");
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.input_buffer, "cran");
    }

    #[test]
    fn short_guess_reports_error_and_keeps_input() {
        let mut app = app();
        type_word(&mut app, "cr");

        assert_eq!(app.input_buffer, "cr");
        assert!(app.history.is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Word must be 5 letters long");
    }

    #[test]
    fn winning_records_stats_and_freezes_board() {
        let mut app = app();
        type_word(&mut app, "trace");
        type_word(&mut app, "crane");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history[1].definition.as_deref(), Some("a large bird"));
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);

        press(&mut app, KeyCode::Char('a'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history.is_empty());
    }

    #[test]
    fn losing_counts_a_game() {
        let mut app = app();
        for word in ["apple", "house", "music", "water", "sleep", "piano"] {
            type_word(&mut app, word);
        }
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn level_select_switches_game() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::LevelSelect);

        // Jhs1 -> Eiken3 is five steps down
        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.level(), Level::Eiken3);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.session().target().word().text(), "topic");
    }

    #[test]
    fn empty_level_keeps_current_game() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.level(), Level::Jhs1);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn hint_key_reveals_letter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(
            app.hint,
            Some(Hint {
                position: 0,
                letter: 'c'
            })
        );
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
