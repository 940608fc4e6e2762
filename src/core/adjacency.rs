//! Grid adjacency on the 5x5 board
//!
//! Cells are indexed 0-24 in row-major order. Two cells are adjacent when
//! their rows and columns each differ by at most one, so diagonals count.

/// Width (and height) of the board grid
pub const GRID_WIDTH: usize = 5;

/// Number of cells on the board
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_WIDTH;

/// Row of a cell index
#[inline]
#[must_use]
pub const fn row(index: usize) -> usize {
    index / GRID_WIDTH
}

/// Column of a cell index
#[inline]
#[must_use]
pub const fn col(index: usize) -> usize {
    index % GRID_WIDTH
}

/// Cell index for a (row, col) pair, if it lies on the board
#[inline]
#[must_use]
pub const fn index_of(row: usize, col: usize) -> Option<usize> {
    if row < GRID_WIDTH && col < GRID_WIDTH {
        Some(row * GRID_WIDTH + col)
    } else {
        None
    }
}

/// Whether `a` and `b` touch horizontally, vertically or diagonally
///
/// A cell counts as adjacent to itself; see [`is_self_adjacent`].
///
/// # Examples
/// ```
/// use boggle_board::core::adjacency::is_adjacent;
///
/// assert!(is_adjacent(0, 6)); // diagonal
/// assert!(!is_adjacent(0, 12)); // two rows away
/// ```
#[inline]
#[must_use]
pub const fn is_adjacent(a: usize, b: usize) -> bool {
    row(a).abs_diff(row(b)) <= 1 && col(a).abs_diff(col(b)) <= 1
}

/// Boundary rule: every cell is adjacent to itself
///
/// The used flag on a selected tile keeps this from ever extending a path
/// with the same cell twice.
#[inline]
#[must_use]
pub const fn is_self_adjacent(index: usize) -> bool {
    is_adjacent(index, index)
}

/// Adjacency against the current path tail
///
/// With no prior selection any cell is a legal start, so `None` is
/// vacuously adjacent.
#[inline]
#[must_use]
pub const fn is_adjacent_to_tail(index: usize, tail: Option<usize>) -> bool {
    match tail {
        Some(t) => is_adjacent(index, t),
        None => true,
    }
}

/// All distinct cells adjacent to `index`, ascending
#[must_use]
pub fn neighbors(index: usize) -> Vec<usize> {
    (0..CELL_COUNT)
        .filter(|&other| other != index && is_adjacent(index, other))
        .collect()
}
