//! The word being built
//!
//! A `WordSession` is a stack of selected cell indices. Picks must chain
//! through adjacent cells, and only the top of the stack can be undone.

use super::GameError;
use crate::core::adjacency::{CELL_COUNT, is_adjacent_to_tail};
use crate::core::{Board, Tile};
use log::{debug, trace};

/// In-progress word state for one board
#[derive(Debug, Clone, Default)]
pub struct WordSession {
    path: Vec<usize>,
    used: [bool; CELL_COUNT],
    word: String,
}

impl WordSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add tile `index` to the end of the word
    ///
    /// Returns the selected tile.
    ///
    /// # Errors
    /// - `TileOutOfRange` if the index is off the board
    /// - `TileAlreadyUsed` if the tile is already in the word
    /// - `NotAdjacent` if it does not touch the last selected tile
    ///
    /// On error nothing changes.
    pub fn select_tile(&mut self, index: usize, board: &Board) -> Result<Tile, GameError> {
        let tile = board.get(index).ok_or(GameError::TileOutOfRange(index))?;

        if self.used[index] {
            return Err(GameError::TileAlreadyUsed);
        }

        if !is_adjacent_to_tail(index, self.tail()) {
            trace!("Rejected tile {index}: not adjacent to {:?}", self.tail());
            return Err(GameError::NotAdjacent);
        }

        self.used[index] = true;
        self.path.push(index);
        self.word.push_str(tile.text());
        debug!("Selected tile {index} ({tile}), word is now {}", self.word);

        Ok(tile)
    }

    /// Undo the most recent pick, which must be tile `index`
    ///
    /// Returns the removed tile.
    ///
    /// # Errors
    /// - `TileOutOfRange` if the index is off the board
    /// - `TileNotSelected` if the tile is not in the word
    /// - `OutOfOrderUndo` if it is in the word but not the last pick
    pub fn deselect_tile(&mut self, index: usize, board: &Board) -> Result<Tile, GameError> {
        let tile = board.get(index).ok_or(GameError::TileOutOfRange(index))?;

        if !self.used[index] {
            return Err(GameError::TileNotSelected);
        }

        if self.tail() != Some(index) {
            trace!("Rejected undo of {index}: last pick is {:?}", self.tail());
            return Err(GameError::OutOfOrderUndo);
        }

        self.path.pop();
        self.used[index] = false;
        self.word.truncate(self.word.len() - tile.char_count());
        debug!("Deselected tile {index} ({tile}), word is now {}", self.word);

        Ok(tile)
    }

    /// Drop the whole word and free every tile
    pub fn reset(&mut self) {
        self.path.clear();
        self.used = [false; CELL_COUNT];
        self.word.clear();
    }

    /// The word spelled so far
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Selected indices, oldest first
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Most recently selected index
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Whether tile `index` is in the word (false off the board)
    #[inline]
    #[must_use]
    pub fn is_used(&self, index: usize) -> bool {
        self.used.get(index).copied().unwrap_or(false)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
