//! Board tiles and board generation
//!
//! A board is 25 tiles in row-major order, produced once per game by
//! shuffling the dice catalog and rolling every die.

use super::adjacency::{CELL_COUNT, GRID_WIDTH};
use super::dice::{DICE, Die, FACES_PER_DIE};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use thiserror::Error;

/// Single-letter tile texts, indexed by `letter - 'A'`
const LETTER_TEXT: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Qu", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// One board cell: a rolled die face
///
/// Stores the face letter. A `Q` face is shown and spelled as `Qu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile(char);

/// Error type for boards built from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Board must have exactly 25 tiles, got {0}")]
    InvalidLength(usize),
    #[error("Tile {0:?} is not an ASCII letter")]
    InvalidLetter(char),
}

impl Tile {
    /// Create a tile from a die face letter (case-insensitive)
    ///
    /// # Errors
    /// Returns `BoardError::InvalidLetter` for anything but `A`-`Z`.
    pub fn new(face: char) -> Result<Self, BoardError> {
        if face.is_ascii_alphabetic() {
            Ok(Self(face.to_ascii_uppercase()))
        } else {
            Err(BoardError::InvalidLetter(face))
        }
    }

    /// The die face this tile was rolled from
    #[inline]
    #[must_use]
    pub const fn face(self) -> char {
        self.0
    }

    /// The text this tile contributes to a word (`"Qu"` for a `Q` face)
    #[inline]
    #[must_use]
    pub const fn text(self) -> &'static str {
        LETTER_TEXT[(self.0 as u8 - b'A') as usize]
    }

    /// Characters this tile contributes to a word
    #[inline]
    #[must_use]
    pub const fn char_count(self) -> usize {
        self.text().len()
    }

    /// Whether this is the two-letter `Qu` tile
    #[inline]
    #[must_use]
    pub const fn is_qu(self) -> bool {
        self.0 == 'Q'
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.text())
    }
}

/// A 5x5 grid of tiles, immutable after creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; CELL_COUNT],
}

impl Board {
    /// Generate a board from the standard dice using the thread RNG
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut rand::rng())
    }

    /// Generate a board from the standard dice using a specific RNG (for seeding)
    pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate_from(&DICE, rng)
    }

    /// Shuffle `dice` and roll each one into a board cell
    ///
    /// Cell `i` holds a face of die `shuffle_dice(..)[i]`.
    pub fn generate_from<R: Rng + ?Sized>(dice: &[Die; CELL_COUNT], rng: &mut R) -> Self {
        Self::generate_with_order(dice, rng).0
    }

    /// Like [`Board::generate_from`], also returning which die landed in each cell
    pub fn generate_with_order<R: Rng + ?Sized>(
        dice: &[Die; CELL_COUNT],
        rng: &mut R,
    ) -> (Self, Vec<usize>) {
        let order = shuffle_dice(dice, rng);
        let tiles = std::array::from_fn(|i| roll(&dice[order[i]], rng));
        let board = Self { tiles };
        debug!("Generated board {}", board.letters());
        (board, order)
    }

    /// Build a board from 25 letters in row-major order
    ///
    /// Whitespace is ignored and `Q` becomes the `Qu` tile, so
    /// `"CATXX YYYYY ..."` style fixtures are accepted.
    ///
    /// # Errors
    /// Returns `BoardError` if a character is not a letter or the count is not 25.
    ///
    /// # Examples
    /// ```
    /// use boggle_board::core::Board;
    ///
    /// let board = Board::from_letters("CATSE QRSTU VWXYZ ABCDE FGHIJ").unwrap();
    /// assert_eq!(board.tile(0).text(), "C");
    /// assert_eq!(board.tile(5).text(), "Qu");
    /// ```
    pub fn from_letters(letters: &str) -> Result<Self, BoardError> {
        let tiles = letters
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Tile::new)
            .collect::<Result<Vec<_>, _>>()?;

        let tiles: [Tile; CELL_COUNT] = tiles
            .try_into()
            .map_err(|v: Vec<Tile>| BoardError::InvalidLength(v.len()))?;

        Ok(Self { tiles })
    }

    /// Tile at a cell index
    ///
    /// # Panics
    /// Panics if index >= 25
    #[inline]
    #[must_use]
    pub const fn tile(&self, index: usize) -> Tile {
        self.tiles[index]
    }

    /// Tile at a cell index, or `None` off the board
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// All tiles in row-major order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; CELL_COUNT] {
        &self.tiles
    }

    /// Tiles of one row
    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        &self.tiles[row * GRID_WIDTH..(row + 1) * GRID_WIDTH]
    }

    /// Face letters in row-major order (`Q` rather than `Qu`)
    #[must_use]
    pub fn letters(&self) -> String {
        self.tiles.iter().map(|t| t.face()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_WIDTH {
            let line: Vec<String> = self.row(r).iter().map(|t| format!("{t:<2}")).collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}

/// Source of boards for successive games
///
/// Seeded dealers replay the same sequence of boards.
pub struct Dealer {
    rng: StdRng,
}

impl Dealer {
    /// A dealer seeded with `seed`, or from OS entropy when `None`
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { rng }
    }

    /// Deal the next board
    pub fn deal(&mut self) -> Board {
        Board::generate_with_rng(&mut self.rng)
    }
}

/// Random permutation of die indices
///
/// Every die gets a uniform key in [0, 1) and the dice are stable-sorted by
/// key, so equal keys keep catalog order.
pub fn shuffle_dice<R: Rng + ?Sized>(dice: &[Die], rng: &mut R) -> Vec<usize> {
    let mut keyed: Vec<(f64, usize)> = (0..dice.len()).map(|i| (rng.random::<f64>(), i)).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, i)| i).collect()
}

/// Roll one die: a uniformly chosen face
fn roll<R: Rng + ?Sized>(die: &Die, rng: &mut R) -> Tile {
    Tile(die.face(rng.random_range(0..FACES_PER_DIE)))
}
