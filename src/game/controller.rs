//! Game controller
//!
//! Owns one board, the word in progress and the ledger, and turns tile clicks
//! and submit presses into state changes plus presentation updates.

use super::port::Presentation;
use super::{GameError, HistoryLedger, WordSession};
use crate::core::{Board, Tile};
use log::{debug, info};

/// What a tile click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAction {
    Selected(Tile),
    Deselected(Tile),
}

/// One game on one board
pub struct Game<P: Presentation> {
    board: Board,
    session: WordSession,
    ledger: HistoryLedger,
    port: P,
}

impl<P: Presentation> Game<P> {
    /// Start a game on `board`, drawing it through `port`
    pub fn new(board: Board, port: P) -> Self {
        let mut game = Self {
            board,
            session: WordSession::new(),
            ledger: HistoryLedger::new(),
            port,
        };
        game.render_fresh_board();
        game
    }

    /// Throw away the current game and start over on `board`
    pub fn restart(&mut self, board: Board) {
        self.board = board;
        self.session = WordSession::new();
        self.ledger = HistoryLedger::new();
        self.port.clear_history();
        self.render_fresh_board();
    }

    fn render_fresh_board(&mut self) {
        info!("New game on board {}", self.board.letters());
        for (index, &tile) in self.board.tiles().iter().enumerate() {
            self.port.render_tile(index, tile);
            self.port.set_tile_disabled(index, false);
        }
        self.port.show_current_word("");
        self.port.update_total(0);
        self.port.clear_error();
    }

    /// Handle a click on tile `index`
    ///
    /// A free tile is added to the word; a picked tile is undone, which only
    /// works for the most recent pick.
    ///
    /// # Errors
    /// Returns the rejected move's `GameError` after showing it.
    pub fn on_tile_clicked(&mut self, index: usize) -> Result<TileAction, GameError> {
        let result = if self.session.is_used(index) {
            self.session
                .deselect_tile(index, &self.board)
                .map(TileAction::Deselected)
        } else {
            self.session
                .select_tile(index, &self.board)
                .map(TileAction::Selected)
        };

        match &result {
            Ok(action) => {
                let disabled = matches!(action, TileAction::Selected(_));
                self.port.set_tile_disabled(index, disabled);
                self.port.show_current_word(self.session.word());
                self.port.clear_error();
            }
            Err(err) => self.port.show_error(&err.to_string()),
        }

        result
    }

    /// Handle the submit button
    ///
    /// On success the word is scored and recorded, and the board is freed for
    /// the next word. Returns the points earned.
    ///
    /// # Errors
    /// `EmptyWord` with nothing selected, `DuplicateWord` for a repeat. The
    /// word in progress is kept either way.
    pub fn on_submit_clicked(&mut self) -> Result<u32, GameError> {
        match self.submit_current_word() {
            Ok(points) => {
                self.port.clear_error();
                Ok(points)
            }
            Err(err) => {
                debug!("Submit rejected: {err}");
                self.port.show_error(&err.to_string());
                Err(err)
            }
        }
    }

    fn submit_current_word(&mut self) -> Result<u32, GameError> {
        if self.session.is_empty() {
            return Err(GameError::EmptyWord);
        }

        let word = self.session.word().to_string();
        let points = self.ledger.submit(&word)?;

        self.port.append_history_row(&word, points);
        self.port.update_total(self.ledger.total());

        for &index in self.session.path() {
            self.port.set_tile_disabled(index, false);
        }
        self.session.reset();
        self.port.show_current_word("");

        Ok(points)
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn session(&self) -> &WordSession {
        &self.session
    }

    #[must_use]
    pub const fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    #[must_use]
    pub const fn port(&self) -> &P {
        &self.port
    }

    pub const fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}
