//! Board generation statistics
//!
//! Deals many boards and checks that letters and die placements come out as
//! often as the dice catalog predicts.

use crate::core::adjacency::CELL_COUNT;
use crate::core::dice::{DICE, DICE_COUNT, expected_letter_frequency};
use crate::core::Board;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Counts gathered over a batch of boards
#[derive(Debug, Clone)]
struct Tally {
    boards: usize,
    letters: [u64; 26],
    boards_with_qu: usize,
    /// `placements[die][cell]`: how often each die landed in each cell
    placements: Vec<[u64; CELL_COUNT]>,
}

impl Tally {
    fn new() -> Self {
        Self {
            boards: 0,
            letters: [0; 26],
            boards_with_qu: 0,
            placements: vec![[0; CELL_COUNT]; DICE_COUNT],
        }
    }

    fn record(mut self, board: &Board, order: &[usize]) -> Self {
        self.boards += 1;
        for tile in board.tiles() {
            self.letters[(tile.face() as u8 - b'A') as usize] += 1;
        }
        if board.tiles().iter().any(|t| t.is_qu()) {
            self.boards_with_qu += 1;
        }
        for (cell, &die) in order.iter().enumerate() {
            self.placements[die][cell] += 1;
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.boards += other.boards;
        self.boards_with_qu += other.boards_with_qu;
        for (a, b) in self.letters.iter_mut().zip(other.letters) {
            *a += b;
        }
        for (row, other_row) in self.placements.iter_mut().zip(&other.placements) {
            for (a, b) in row.iter_mut().zip(other_row) {
                *a += b;
            }
        }
        self
    }
}

/// One letter's observed and expected share of board cells
#[derive(Debug, Clone, Copy)]
pub struct LetterFrequency {
    pub letter: char,
    pub observed: f64,
    pub expected: f64,
}

/// Result of a statistics run
#[derive(Debug, Clone)]
pub struct BoardStatistics {
    pub boards: usize,
    pub seed: u64,
    pub letters: Vec<LetterFrequency>,
    /// Share of boards showing a `Qu` tile
    pub qu_rate: f64,
    /// Expected share of boards showing a `Qu` tile (one die, one face in six)
    pub expected_qu_rate: f64,
    /// Largest relative gap between any die-in-cell count and its expectation
    pub max_placement_deviation: f64,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Deal `count` boards in parallel and summarize them
///
/// Board `i` is dealt from its own RNG seeded with `seed + i`, so results
/// depend only on `seed` and `count`, never on thread scheduling.
#[must_use]
pub fn run_board_stats(count: usize, seed: u64) -> BoardStatistics {
    info!("Dealing {count} boards from seed {seed}");
    let start = Instant::now();

    let pb = ProgressBar::new(count as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("Dealing boards");

    let tally = (0..count as u64)
        .into_par_iter()
        .fold(Tally::new, |tally, i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i));
            let (board, order) = Board::generate_with_order(&DICE, &mut rng);
            pb.inc(1);
            tally.record(&board, &order)
        })
        .reduce(Tally::new, Tally::merge);

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    summarize(&tally, seed, duration)
}

fn summarize(tally: &Tally, seed: u64, duration: Duration) -> BoardStatistics {
    let cells = (tally.boards * CELL_COUNT) as f64;

    let letters = ('A'..='Z')
        .zip(tally.letters)
        .map(|(letter, n)| LetterFrequency {
            letter,
            observed: if cells > 0.0 { n as f64 / cells } else { 0.0 },
            expected: expected_letter_frequency(letter),
        })
        .collect();

    let qu_rate = if tally.boards > 0 {
        tally.boards_with_qu as f64 / tally.boards as f64
    } else {
        0.0
    };

    // Each die should land in each cell once every 25 boards
    let expected_placement = tally.boards as f64 / CELL_COUNT as f64;
    let max_placement_deviation = if expected_placement > 0.0 {
        tally
            .placements
            .iter()
            .flatten()
            .map(|&n| (n as f64 - expected_placement).abs() / expected_placement)
            .fold(0.0, f64::max)
    } else {
        0.0
    };

    BoardStatistics {
        boards: tally.boards,
        seed,
        letters,
        qu_rate,
        expected_qu_rate: 1.0 / 6.0,
        max_placement_deviation,
        duration,
        boards_per_second: tally.boards as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
