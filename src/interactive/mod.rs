//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Direction, Message, MessageStyle, run_tui};
pub use rendering::{tile_at, tile_rects};
