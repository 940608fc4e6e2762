//! TUI rendering with ratatui
//!
//! The board grid, current word, submitted words and messages.

use super::app::{App, MessageStyle};
use crate::core::adjacency::{CELL_COUNT, GRID_WIDTH, col, row};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Row, Table},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = TILE_WIDTH * GRID_WIDTH as u16 + 2;

/// Screen regions: header, board, side panel, status bar
fn regions(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BOARD_WIDTH), // Board
            Constraint::Min(20),             // Side panel
        ])
        .split(chunks[1]);

    [chunks[0], main_chunks[0], main_chunks[1], chunks[2]]
}

/// Screen rectangle of every tile for a frame of size `area`
///
/// Tiles that do not fit are clipped to the board panel (possibly empty).
#[must_use]
pub fn tile_rects(area: Rect) -> Vec<Rect> {
    let board = regions(area)[1];
    let inner = Rect::new(
        board.x.saturating_add(1),
        board.y.saturating_add(1),
        board.width.saturating_sub(2),
        board.height.saturating_sub(2),
    );

    (0..CELL_COUNT)
        .map(|index| {
            let tile = Rect::new(
                inner.x + col(index) as u16 * TILE_WIDTH,
                inner.y + row(index) as u16 * TILE_HEIGHT,
                TILE_WIDTH,
                TILE_HEIGHT,
            );
            tile.intersection(inner)
        })
        .collect()
}

/// Tile under screen position (`x`, `y`), if any
#[must_use]
pub fn tile_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    tile_rects(area).iter().position(|r| {
        r.width > 0 && x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height
    })
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let [header, board, side, status] = regions(f.area());

    render_header(f, header);
    render_board(f, app, board);
    render_side_panel(f, app, side);
    render_status(f, app, status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎲 BOGGLE - Interactive Mode")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, area);

    let view = app.game.port();
    let tail = app.game.session().tail();

    for (index, rect) in tile_rects(f.area()).into_iter().enumerate() {
        if rect.width < TILE_WIDTH || rect.height < TILE_HEIGHT {
            continue;
        }

        let (fg, border) = if view.disabled[index] {
            if Some(index) == tail {
                (Color::Black, Color::LightYellow)
            } else {
                (Color::Black, Color::Yellow)
            }
        } else if app.is_legal_next(index) {
            (Color::White, Color::Green)
        } else {
            (Color::White, Color::DarkGray)
        };

        let mut text_style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
        if view.disabled[index] {
            text_style = text_style.bg(border);
        }

        let border_type = if index == app.cursor {
            BorderType::Double
        } else {
            BorderType::Rounded
        };
        let border_style = if index == app.cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(border)
        };

        let tile = Paragraph::new(view.tile_text(index))
            .style(text_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .border_style(border_style),
            );
        f.render_widget(tile, rect);
    }
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // Current word and error
            Constraint::Percentage(60), // History
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_current_word(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_current_word(f: &mut Frame, app: &App, area: Rect) {
    let view = app.game.port();

    let mut content = vec![Line::from(vec![
        Span::raw("Word: "),
        Span::styled(
            view.current_word.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some(ref error) = view.error {
        content.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Current Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let view = app.game.port();
    // Newest rows that fit, above the totals row
    let visible = usize::from(area.height.saturating_sub(4));
    let skip = view.history.len().saturating_sub(visible);

    let mut rows: Vec<Row> = view
        .history
        .iter()
        .skip(skip)
        .map(|(word, score)| Row::new(vec![word.clone(), score.to_string()]))
        .collect();
    rows.push(
        Row::new(vec!["Total".to_string(), view.total.to_string()]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    );

    let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(6)])
        .header(Row::new(vec!["Word", "Score"]).style(Style::default().fg(Color::DarkGray)))
        .block(
            Block::default()
                .title(format!(" History ({}) ", view.history.len()))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(table, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let (r, c) = app.cursor_position();
    let cursor = Paragraph::new(format!("Cursor: row {} col {}", r + 1, c + 1))
        .alignment(Alignment::Center);
    f.render_widget(cursor, chunks[0]);

    let stats = Paragraph::new(format!(
        "Game {} | Best: {}",
        app.games_played, app.best_total
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("←↑↓→: Move | Space: Pick | u: Undo | Enter: Submit | n: New | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dealer;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn tiles_are_laid_out_in_a_grid() {
        let area = Rect::new(0, 0, 100, 30);
        let rects = tile_rects(area);
        assert_eq!(rects.len(), 25);

        // Header is 3 rows, board border 1
        assert_eq!(rects[0], Rect::new(1, 4, TILE_WIDTH, TILE_HEIGHT));
        assert_eq!(rects[6].x, rects[0].x + TILE_WIDTH);
        assert_eq!(rects[6].y, rects[0].y + TILE_HEIGHT);
    }

    #[test]
    fn hit_test_finds_tiles() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(tile_at(area, 1, 4), Some(0));
        assert_eq!(tile_at(area, 1 + TILE_WIDTH, 4 + TILE_HEIGHT), Some(6));
        assert_eq!(tile_at(area, 0, 0), None);
        assert_eq!(tile_at(area, 90, 20), None);
    }

    #[test]
    fn renders_on_small_and_large_terminals() {
        for (w, h) in [(100, 30), (30, 10)] {
            let backend = TestBackend::new(w, h);
            let mut terminal = Terminal::new(backend).unwrap();
            let mut app = App::new(Dealer::new(Some(3)));
            app.click(0);
            terminal.draw(|f| ui(f, &app)).unwrap();
        }
    }
}
