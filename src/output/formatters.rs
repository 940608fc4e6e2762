//! Formatting utilities for terminal output

use crate::core::adjacency::{GRID_WIDTH, index_of};
use crate::game::BoardView;

/// One grid cell ready to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellText {
    pub text: &'static str,
    pub disabled: bool,
}

/// The board view as rows of cells
#[must_use]
pub fn board_lines(view: &BoardView) -> Vec<Vec<CellText>> {
    (0..GRID_WIDTH)
        .map(|row| {
            (0..GRID_WIDTH)
                .filter_map(|col| index_of(row, col))
                .map(|index| CellText {
                    text: view.tile_text(index),
                    disabled: view.disabled[index],
                })
                .collect()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Signed percentage difference of `observed` from `expected`
#[must_use]
pub fn deviation_pct(observed: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        0.0
    } else {
        (observed - expected) / expected * 100.0
    }
}
