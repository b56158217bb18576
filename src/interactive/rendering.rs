//! TUI rendering with ratatui
//!
//! Board, keyboard and side panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KEYBOARD_ROWS, LetterStatus, MAX_GUESSES, WORD_LENGTH};
use crate::game::GameStatus;
use crate::wordlists::{Level, WordProvider};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<P: WordProvider>(f: &mut Frame, app: &App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(18),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // History and messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    if app.input_mode == InputMode::LevelSelect {
        render_level_select(f, app, main_chunks[1]);
    } else {
        render_info_panel(f, app, main_chunks[1]);
    }

    render_status(f, app, chunks[2]);
}

/// Tile colors for a letter status
fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: Option<char>, style: Style) -> Span<'static> {
    let text = letter.map_or_else(
        || " · ".to_string(),
        |c| format!(" {} ", c.to_ascii_uppercase()),
    );
    Span::styled(text, style)
}

fn render_header<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let header = Paragraph::new(format!("🔤 {}", app.game.level().title()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_play_panel<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_GUESSES as u16 * 2 + 2), // Board
            Constraint::Min(5),                             // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_board<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let session = app.game.session();
    let guesses = session.guesses();
    let typing = session.status() == GameStatus::Playing;

    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);
    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        if let Some(guess) = guesses.get(row) {
            for (&letter, &status) in guess.word().chars().iter().zip(guess.feedback().statuses()) {
                spans.push(tile(Some(char::from(letter)), status_style(Some(status))));
                spans.push(Span::raw(" "));
            }
        } else if typing && row == session.current_row() {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for position in 0..WORD_LENGTH {
                let style = Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
                let letter = typed.get(position).copied().or_else(|| {
                    app.hint
                        .filter(|h| h.position == position)
                        .map(|h| h.letter)
                });
                spans.push(tile(letter, style));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(tile(None, Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Board {}/{MAX_GUESSES} ", session.current_row()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_keyboard<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let keyboard = app.game.session().keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|key| {
                    [
                        tile(Some(char::from(key)), status_style(keyboard.status(key))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(widget, area);
}

fn render_info_panel<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // History (or answer)
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    if app.input_mode == InputMode::GameOver {
        render_answer(f, app, chunks[0]);
    } else {
        render_history(f, app, chunks[0]);
    }
    render_messages(f, app, chunks[1]);
}

fn render_history<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut lines = vec![Line::from(vec![
                Span::raw(format!("{}: ", i + 1)),
                Span::styled(
                    entry.word.text().to_uppercase(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {}", entry.feedback.to_emoji())),
            ])];
            if let Some(definition) = &entry.definition {
                lines.push(Line::styled(
                    format!("   {definition}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(lines)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_answer<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let session = app.game.session();
    let target = session.target();
    let (title, color) = if session.status() == GameStatus::Won {
        (" 🎉 CONGRATULATIONS! 🎉 ", Color::Green)
    } else {
        (" Better luck next time ", Color::Red)
    };

    let content = vec![
        Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                target.word().text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(target.definition().to_string()),
    ];

    let answer = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(answer, area);
}

fn render_level_select<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let items: Vec<ListItem> = Level::ALL
        .iter()
        .map(|level| ListItem::new(format!("{:<12} {}", level.label(), level.key())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Choose Level | ↑↓ Enter | Esc to cancel ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.level_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_messages<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Playing",
        InputMode::GameOver => "Mode: Game Over",
        InputMode::LevelSelect => "Mode: Level Select",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Enter: Submit | Tab: Level | ^N: New | ^H/?: Hint | Esc: Quit",
        InputMode::GameOver => "n: New Game | l: Level | q: Quit",
        InputMode::LevelSelect => "↑↓: Move | Enter: Select | Esc: Back",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Game;
    use crate::wordlists::{WordEntry, WordPool};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let mut pool = WordPool::new(StdRng::seed_from_u64(9));
        pool.replace_level(
            Level::Eiken2,
            vec![WordEntry::new(Word::new("trend").unwrap(), "a general direction")],
        );
        App::new(Game::new(pool, Level::Eiken2).unwrap())
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_title_and_keyboard() {
        let screen = render(&app());
        assert!(screen.contains("Eiken 2 Wordle"));
        assert!(screen.contains("Keyboard"));
        assert!(screen.contains("Mode: Playing"));
    }

    #[test]
    fn renders_answer_after_game_over() {
        let mut app = app();
        app.input_buffer = "trend".to_string();
        app.submit_guess();

        let screen = render(&app);
        assert!(screen.contains("TREND"));
        assert!(screen.contains("Mode: Game Over"));
    }

    #[test]
    fn renders_level_selector() {
        let mut app = app();
        app.open_level_select();
        let screen = render(&app);
        assert!(screen.contains("Choose Level"));
        assert!(screen.contains("eiken-pre1"));
    }
}
