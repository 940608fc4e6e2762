//! Core domain types for the board game
//!
//! Dice, tiles, board generation, grid adjacency and scoring. Everything here
//! is pure data and pure functions; game state lives in [`crate::game`].

pub mod adjacency;
pub mod board;
pub mod dice;
pub mod scoring;

pub use adjacency::{CELL_COUNT, GRID_WIDTH, is_adjacent};
pub use board::{Board, BoardError, Dealer, Tile, shuffle_dice};
pub use dice::{DICE, Die};
pub use scoring::score;
