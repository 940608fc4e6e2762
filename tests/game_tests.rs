//! End-to-end games through the controller

use boggle_board::core::Board;
use boggle_board::game::{BoardView, Game, GameError, TileAction};

// C A T S X
// O D G E X
// X Q I T X
// X X X X X
// X X X X X
fn new_game() -> Game<BoardView> {
    let board = Board::from_letters("CATSX ODGEX XQITX XXXXX XXXXX").unwrap();
    Game::new(board, BoardView::new())
}

#[test]
fn cat_scores_one_and_board_resets() {
    let mut game = new_game();

    for index in [0, 1, 2] {
        game.on_tile_clicked(index).unwrap();
    }
    assert_eq!(game.port().current_word, "CAT");
    assert!(game.port().disabled[..3].iter().all(|&d| d));

    assert_eq!(game.on_submit_clicked(), Ok(1));

    let view = game.port();
    assert_eq!(view.history, vec![("CAT".to_string(), 1)]);
    assert_eq!(view.total, 1);
    assert_eq!(view.current_word, "");
    assert!(view.error.is_none());
    assert!(view.disabled.iter().all(|&d| !d));
    assert!(game.session().is_empty());
}

#[test]
fn new_game_shows_full_board() {
    let game = new_game();
    let view = game.port();
    assert_eq!(view.tile_text(0), "C");
    assert_eq!(view.tile_text(11), "Qu");
    assert_eq!(view.total, 0);
    assert!(view.history.is_empty());
}

#[test]
fn quit_through_qu_tile() {
    let mut game = new_game();

    // Qu (11) -> I (12) -> T (13)
    for index in [11, 12, 13] {
        game.on_tile_clicked(index).unwrap();
    }
    assert_eq!(game.session().word(), "QuIT");

    // Undo T, then Qu is not the tail
    assert!(matches!(
        game.on_tile_clicked(13),
        Ok(TileAction::Deselected(_))
    ));
    assert_eq!(game.on_tile_clicked(11), Err(GameError::OutOfOrderUndo));
    assert_eq!(game.port().error.as_deref(), Some("You can only undo your last move."));

    // Undo I and Qu: both tiles' characters go
    game.on_tile_clicked(12).unwrap();
    game.on_tile_clicked(11).unwrap();
    assert_eq!(game.session().word(), "");
    assert!(game.port().error.is_none());
}

#[test]
fn four_characters_from_three_tiles_score_one() {
    let mut game = new_game();
    for index in [11, 12, 13] {
        game.on_tile_clicked(index).unwrap();
    }
    assert_eq!(game.on_submit_clicked(), Ok(1));
    assert_eq!(game.ledger().entries()[0].word, "QuIT");
}

#[test]
fn errors_are_replaced_then_cleared() {
    let mut game = new_game();

    assert_eq!(game.on_submit_clicked(), Err(GameError::EmptyWord));
    assert_eq!(
        game.port().error.as_deref(),
        Some("You cannot submit empty words.")
    );

    game.on_tile_clicked(0).unwrap();
    assert!(game.port().error.is_none());

    assert_eq!(game.on_tile_clicked(24), Err(GameError::NotAdjacent));
    assert_eq!(
        game.port().error.as_deref(),
        Some("The next tile needs to be adjacent to the last tile selected.")
    );

    game.on_tile_clicked(5).unwrap();
    assert!(game.port().error.is_none());
    assert_eq!(game.port().current_word, "CO");
}

#[test]
fn duplicate_word_from_different_path_is_rejected() {
    let mut game = new_game();

    // Two T tiles touch the E, so "GET" can be spelled twice
    for index in [7, 8, 13] {
        game.on_tile_clicked(index).unwrap();
    }
    assert_eq!(game.session().word(), "GET");
    assert_eq!(game.on_submit_clicked(), Ok(1));

    for index in [7, 8, 2] {
        game.on_tile_clicked(index).unwrap();
    }

    assert_eq!(game.on_submit_clicked(), Err(GameError::DuplicateWord));
    assert_eq!(game.ledger().total(), 1);
    assert_eq!(game.port().history.len(), 1);
    assert_eq!(game.session().word(), "GET");
}

#[test]
fn many_words_accumulate_total() {
    let mut game = new_game();
    let words: [&[usize]; 3] = [&[0, 1, 2], &[0, 1, 2, 3], &[5, 6, 7, 8]];

    for path in words {
        for &index in path {
            game.on_tile_clicked(index).unwrap();
        }
        game.on_submit_clicked().unwrap();
    }

    let words: Vec<&str> = game.port().history.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, ["CAT", "CATS", "ODGE"]);
    assert_eq!(game.port().total, 3);
}
