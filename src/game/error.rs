//! Errors raised by player actions
//!
//! Every variant is a recoverable input problem. The `Display` text is the
//! message shown to the player.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Submit with no tiles selected
    #[error("You cannot submit empty words.")]
    EmptyWord,

    /// Word already recorded this game
    #[error("You have already submitted this word before.")]
    DuplicateWord,

    /// Selected tile does not touch the last selected tile
    #[error("The next tile needs to be adjacent to the last tile selected.")]
    NotAdjacent,

    /// Deselect on a tile that is not the most recent pick
    #[error("You can only undo your last move.")]
    OutOfOrderUndo,

    /// Index outside the 5x5 grid
    #[error("There is no tile at position {0}.")]
    TileOutOfRange(usize),

    /// Select on a tile that is already part of the word
    #[error("That tile is already part of your word.")]
    TileAlreadyUsed,

    /// Deselect on a tile that was never selected
    #[error("That tile is not part of your word.")]
    TileNotSelected,
}
