//! TUI application state and logic

use super::rendering::tile_at;
use crate::core::Dealer;
use crate::core::adjacency::{CELL_COUNT, GRID_WIDTH, col, index_of, row};
use crate::game::{BoardView, Game, TileAction};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

/// Application state
pub struct App {
    pub game: Game<BoardView>,
    pub dealer: Dealer,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub games_played: usize,
    pub best_total: u32,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Cursor movement on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl App {
    #[must_use]
    pub fn new(mut dealer: Dealer) -> Self {
        let game = Game::new(dealer.deal(), BoardView::new());

        Self {
            game,
            dealer,
            cursor: 0,
            messages: vec![
                Message {
                    text: "Spell words through touching tiles, diagonals included.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Space picks a tile, Enter submits the word.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            games_played: 1,
            best_total: 0,
            should_quit: false,
        }
    }

    /// Move the cursor one cell, stopping at the edges
    pub fn move_cursor(&mut self, direction: Direction) {
        let (r, c) = (row(self.cursor), col(self.cursor));
        let target = match direction {
            Direction::Up => r.checked_sub(1).and_then(|r| index_of(r, c)),
            Direction::Down => index_of(r + 1, c),
            Direction::Left => c.checked_sub(1).and_then(|c| index_of(r, c)),
            Direction::Right => index_of(r, c + 1),
        };
        if let Some(index) = target {
            self.cursor = index;
        }
    }

    /// Click the tile under the cursor
    pub fn click_cursor(&mut self) {
        self.click(self.cursor);
    }

    /// Click tile `index`
    ///
    /// Errors are already on the board view; nothing else to report.
    pub fn click(&mut self, index: usize) {
        if index >= CELL_COUNT {
            return;
        }
        self.cursor = index;
        if let Ok(action) = self.game.on_tile_clicked(index) {
            debug!("Tile {index}: {action:?}");
        }
    }

    /// Undo the most recent pick, wherever the cursor is
    pub fn undo_last(&mut self) {
        if let Some(tail) = self.game.session().tail() {
            if let Ok(TileAction::Deselected(_)) = self.game.on_tile_clicked(tail) {
                self.cursor = self.game.session().tail().unwrap_or(tail);
            }
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn submit(&mut self) {
        let word = self.game.session().word().to_string();
        if let Ok(points) = self.game.on_submit_clicked() {
            let celebration = match points {
                0 => format!("{word} scored nothing (3+ letters score)"),
                1 => format!("{word}: 1 point"),
                11 => format!("🎉 {word}: 11 points! 🎉"),
                _ => format!("✨ {word}: {points} points ✨"),
            };
            self.add_message(&celebration, MessageStyle::Success);
        }
    }

    pub fn new_game(&mut self) {
        self.best_total = self.best_total.max(self.game.ledger().total());
        self.game.restart(self.dealer.deal());
        self.games_played += 1;
        self.cursor = 0;
        self.messages.clear();
        self.add_message("New board dealt!", MessageStyle::Info);
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

    /// Whether `index` would extend the current word
    #[must_use]
    pub fn is_legal_next(&self, index: usize) -> bool {
        let session = self.game.session();
        !session.is_used(index)
            && session
                .tail()
                .is_some_and(|tail| crate::core::is_adjacent(index, tail))
    }

    /// Cursor position as (row, col)
    #[must_use]
    pub const fn cursor_position(&self) -> (usize, usize) {
        (self.cursor / GRID_WIDTH, self.cursor % GRID_WIDTH)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Direction::Up),
                    KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Direction::Down),
                    KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Direction::Left),
                    KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Direction::Right),
                    KeyCode::Char(' ') => app.click_cursor(),
                    KeyCode::Backspace | KeyCode::Char('u') => app.undo_last(),
                    KeyCode::Enter => app.submit(),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    if let Some(index) = tile_at(area, mouse.column, mouse.row) {
                        app.click(index);
                    }
                }
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
