//! The fixed dice catalog
//!
//! 25 six-sided letter dice, one per board cell. The catalog never changes at
//! runtime; board generation only permutes it and rolls each die once.

use std::fmt;

/// Number of faces on every die
pub const FACES_PER_DIE: usize = 6;

/// Number of dice in the catalog (one per board cell)
pub const DICE_COUNT: usize = 25;

/// A single six-faced letter die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    faces: [char; FACES_PER_DIE],
}

impl Die {
    /// Build a die from its six faces (uppercase ASCII letters)
    #[must_use]
    pub const fn new(faces: [char; FACES_PER_DIE]) -> Self {
        Self { faces }
    }

    /// The faces in catalog order
    #[inline]
    #[must_use]
    pub const fn faces(&self) -> &[char; FACES_PER_DIE] {
        &self.faces
    }

    /// Face at `index` (0-5)
    ///
    /// # Panics
    /// Panics if index >= 6
    #[inline]
    #[must_use]
    pub const fn face(&self, index: usize) -> char {
        self.faces[index]
    }

    /// How many faces show `letter`
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.faces.iter().filter(|&&f| f == letter).count()
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.faces {
            write!(f, "{face}")?;
        }
        Ok(())
    }
}

const fn die(s: &[u8; FACES_PER_DIE]) -> Die {
    Die::new([
        s[0] as char,
        s[1] as char,
        s[2] as char,
        s[3] as char,
        s[4] as char,
        s[5] as char,
    ])
}

/// The standard 25-die catalog
///
/// The `BJKQXZ` die is the only source of `Q`, which always lands on the
/// board as the two-letter tile `Qu`.
pub const DICE: [Die; DICE_COUNT] = [
    die(b"AAAFRS"),
    die(b"AAEEEE"),
    die(b"AAFIRS"),
    die(b"ADENNN"),
    die(b"AEEEEM"),
    die(b"AEEGMU"),
    die(b"AEGMNN"),
    die(b"AFIRSY"),
    die(b"BJKQXZ"),
    die(b"CCENST"),
    die(b"CEIILT"),
    die(b"CEILPT"),
    die(b"CEIPST"),
    die(b"DDHNOT"),
    die(b"DHHLOR"),
    die(b"DHLNOR"),
    die(b"DHLNOR"),
    die(b"EIIITT"),
    die(b"EMOTTT"),
    die(b"ENSSSU"),
    die(b"FIPRSY"),
    die(b"GORRVW"),
    die(b"IPRRRY"),
    die(b"NOOTUW"),
    die(b"OOOTTU"),
];

/// Expected share of board cells showing `letter`, across all dice
///
/// Each die lands once per board and each face is equally likely, so a letter's
/// expected frequency is its face count summed over dice, divided by all faces.
#[must_use]
pub fn expected_letter_frequency(letter: char) -> f64 {
    let faces: usize = DICE.iter().map(|d| d.count_of(letter)).sum();
    faces as f64 / (DICE_COUNT * FACES_PER_DIE) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_25_dice() {
        assert_eq!(DICE.len(), 25);
    }

    #[test]
    fn all_faces_are_uppercase_letters() {
        for die in &DICE {
            for &face in die.faces() {
                assert!(face.is_ascii_uppercase(), "Die {die} has face {face:?}");
            }
        }
    }

    #[test]
    fn q_appears_on_exactly_one_die() {
        let q_dice: Vec<_> = DICE.iter().filter(|d| d.count_of('Q') > 0).collect();
        assert_eq!(q_dice.len(), 1);
        assert_eq!(q_dice[0].to_string(), "BJKQXZ");
    }

    #[test]
    fn die_display_and_count() {
        let die = DICE[1];
        assert_eq!(die.to_string(), "AAEEEE");
        assert_eq!(die.count_of('E'), 4);
        assert_eq!(die.count_of('A'), 2);
        assert_eq!(die.count_of('Z'), 0);
        assert_eq!(die.face(0), 'A');
    }

    #[test]
    fn expected_frequencies_sum_to_one() {
        let total: f64 = ('A'..='Z').map(expected_letter_frequency).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn expected_frequency_of_q() {
        let q = expected_letter_frequency('Q');
        assert!((q - 1.0 / 150.0).abs() < 1e-12);
    }
}
