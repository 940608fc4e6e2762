//! The presentation port
//!
//! The game never draws anything itself. It pushes every visible change
//! through a [`Presentation`], which a terminal UI, a console printer or a
//! test recorder implements.

use crate::core::adjacency::CELL_COUNT;
use crate::core::Tile;

/// Callbacks from the game to whatever displays it
pub trait Presentation {
    /// Draw the tile at `index` (called for all 25 cells when a game starts)
    fn render_tile(&mut self, index: usize, tile: Tile);

    /// Mark a tile as picked (`true`) or available again (`false`)
    fn set_tile_disabled(&mut self, index: usize, disabled: bool);

    /// Show the word spelled so far
    fn show_current_word(&mut self, word: &str);

    /// Add a row to the submitted-words table
    fn append_history_row(&mut self, word: &str, score: u32);

    /// Show the running total
    fn update_total(&mut self, total: u32);

    /// Show an error, replacing any earlier one
    fn show_error(&mut self, message: &str);

    /// Remove the current error
    fn clear_error(&mut self);

    /// Drop all history rows (a new game is starting)
    fn clear_history(&mut self) {}
}

/// A presentation that mirrors the visible game state
///
/// Rendering code reads it instead of reaching into the game.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    pub tiles: [Option<Tile>; CELL_COUNT],
    pub disabled: [bool; CELL_COUNT],
    pub current_word: String,
    pub history: Vec<(String, u32)>,
    pub total: u32,
    pub error: Option<String>,
}

impl BoardView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown on tile `index`, or a blank before the board is dealt
    #[must_use]
    pub fn tile_text(&self, index: usize) -> &'static str {
        self.tiles
            .get(index)
            .copied()
            .flatten()
            .map_or(" ", Tile::text)
    }
}

impl Presentation for BoardView {
    fn render_tile(&mut self, index: usize, tile: Tile) {
        if let Some(slot) = self.tiles.get_mut(index) {
            *slot = Some(tile);
        }
    }

    fn set_tile_disabled(&mut self, index: usize, disabled: bool) {
        if let Some(flag) = self.disabled.get_mut(index) {
            *flag = disabled;
        }
    }

    fn show_current_word(&mut self, word: &str) {
        word.clone_into(&mut self.current_word);
    }

    fn append_history_row(&mut self, word: &str, score: u32) {
        self.history.push((word.to_string(), score));
    }

    fn update_total(&mut self, total: u32) {
        self.total = total;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn clear_history(&mut self) {
        self.history.clear();
    }
}
