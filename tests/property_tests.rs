//! Property-based tests for board generation, adjacency and word building.

use boggle_board::core::adjacency::{CELL_COUNT, is_adjacent};
use boggle_board::core::scoring::score;
use boggle_board::core::Board;
use boggle_board::game::{BoardView, Game, WordSession};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Strategy: a valid cell index (0-24).
fn cell_strategy() -> impl Strategy<Value = usize> {
    0..CELL_COUNT
}

proptest! {
    // 1. Every board has 25 tiles, each A-Z (never a bare Q) or Qu
    #[test]
    fn boards_are_well_formed(seed in any::<u64>()) {
        let board = Board::generate_with_rng(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(board.tiles().len(), 25);
        for tile in board.tiles() {
            let text = tile.text();
            prop_assert!(text == "Qu" || (text.len() == 1 && text != "Q"
                && text.chars().all(|c| c.is_ascii_uppercase())));
            prop_assert_eq!(tile.face() == 'Q', text == "Qu");
        }
    }

    // 2. Adjacency is symmetric
    #[test]
    fn adjacency_symmetric(a in cell_strategy(), b in cell_strategy()) {
        prop_assert_eq!(is_adjacent(a, b), is_adjacent(b, a));
    }

    // 3. Scores depend only on length and never decrease with it
    #[test]
    fn score_monotonic(word in "[A-Z]{0,12}", extra in "[A-Z]") {
        let longer = format!("{word}{extra}");
        prop_assert!(score(&longer) >= score(&word));
    }

    // 4. Random click sequences keep the word equal to the path's tiles
    #[test]
    fn word_matches_path(seed in any::<u64>(), clicks in prop::collection::vec(cell_strategy(), 0..40)) {
        let board = Board::generate_with_rng(&mut StdRng::seed_from_u64(seed));
        let mut session = WordSession::new();

        for index in clicks {
            if session.is_used(index) {
                let _ = session.deselect_tile(index, &board);
            } else {
                let _ = session.select_tile(index, &board);
            }

            let spelled: String = session.path().iter().map(|&i| board.tile(i).text()).collect();
            prop_assert_eq!(session.word(), spelled.as_str());

            for pair in session.path().windows(2) {
                prop_assert!(is_adjacent(pair[0], pair[1]));
            }
            let mut sorted = session.path().to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), session.path().len());
        }
    }

    // 5. Failed actions never change the ledger; total is always the sum of rows
    #[test]
    fn ledger_total_is_sum(seed in any::<u64>(), clicks in prop::collection::vec(0..=CELL_COUNT, 0..60)) {
        let board = Board::generate_with_rng(&mut StdRng::seed_from_u64(seed));
        let mut game = Game::new(board, BoardView::new());

        // CELL_COUNT doubles as "press submit"
        for click in clicks {
            let before = game.ledger().total();
            let result = if click == CELL_COUNT {
                game.on_submit_clicked().map(|_| ())
            } else {
                game.on_tile_clicked(click).map(|_| ())
            };
            if result.is_err() {
                prop_assert_eq!(game.ledger().total(), before);
                prop_assert!(game.port().error.is_some());
            } else {
                prop_assert!(game.port().error.is_none());
            }

            let sum: u32 = game.port().history.iter().map(|(_, s)| s).sum();
            prop_assert_eq!(game.port().total, sum);
            prop_assert_eq!(game.ledger().total(), sum);
        }
    }
}
