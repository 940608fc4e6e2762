//! Boggle Board
//!
//! A single-player Boggle-style word game on a 5x5 grid of letter dice.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_board::core::Board;
//! use boggle_board::game::{BoardView, Game};
//!
//! let board = Board::from_letters("CATXX XXXXX XXXXX XXXXX XXXXX").unwrap();
//! let mut game = Game::new(board, BoardView::new());
//!
//! for index in [0, 1, 2] {
//!     game.on_tile_clicked(index).unwrap();
//! }
//! assert_eq!(game.on_submit_clicked(), Ok(1));
//! assert_eq!(game.port().total, 1);
//! ```

// Core domain types
pub mod core;

// Game state and rules
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
