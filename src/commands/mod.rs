//! Command implementations

pub mod simple;
pub mod stats;

pub use simple::{ConsolePresentation, run_simple};
pub use stats::{BoardStatistics, LetterFrequency, run_board_stats};
