//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: type tile positions to pick letters.

use crate::core::adjacency::{CELL_COUNT, GRID_WIDTH, index_of};
use crate::core::{Dealer, Tile};
use crate::game::{BoardView, Game, Presentation};
use crate::output::formatters::board_lines;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click a tile by cell index
    Click(usize),
    Submit,
    NewGame,
    Board,
    Help,
    Quit,
}

/// Parse one input line
///
/// Accepts a cell index (`0`-`24`), a 1-based `row,col` pair (`2,3`), or a
/// command word. Returns `None` for anything else.
#[must_use]
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "" | "s" | "submit" => return Some(Command::Submit),
        "n" | "new" => return Some(Command::NewGame),
        "b" | "board" => return Some(Command::Board),
        "h" | "help" | "?" => return Some(Command::Help),
        "q" | "quit" | "exit" => return Some(Command::Quit),
        _ => {}
    }

    if let Some((r, c)) = input.split_once([',', ' ']) {
        let r: usize = r.trim().parse().ok()?;
        let c: usize = c.trim().parse().ok()?;
        return index_of(r.checked_sub(1)?, c.checked_sub(1)?).map(Command::Click);
    }

    input
        .parse::<usize>()
        .ok()
        .filter(|&i| i < CELL_COUNT)
        .map(Command::Click)
}

/// Presentation that prints each change to the console
///
/// Keeps a [`BoardView`] so the grid can be redrawn on request.
#[derive(Debug, Default)]
pub struct ConsolePresentation {
    view: BoardView,
}

impl ConsolePresentation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn view(&self) -> &BoardView {
        &self.view
    }

    /// Print the grid, picked tiles highlighted
    pub fn print_board(&self) {
        println!();
        for line in board_lines(&self.view) {
            let mut rendered = String::from("   ");
            for (col, cell) in line.iter().enumerate() {
                let text = format!("{:<3}", cell.text);
                let text = if cell.disabled {
                    text.black().on_yellow().bold()
                } else {
                    text.bright_white().bold()
                };
                rendered.push_str(&text.to_string());
                if col + 1 < GRID_WIDTH {
                    rendered.push(' ');
                }
            }
            println!("{rendered}");
        }
        println!();
    }
}

impl Presentation for ConsolePresentation {
    fn render_tile(&mut self, index: usize, tile: Tile) {
        self.view.render_tile(index, tile);
    }

    fn set_tile_disabled(&mut self, index: usize, disabled: bool) {
        self.view.set_tile_disabled(index, disabled);
    }

    fn show_current_word(&mut self, word: &str) {
        self.view.show_current_word(word);
        if !word.is_empty() {
            println!("Current word: {}", word.bright_yellow().bold());
        }
    }

    fn append_history_row(&mut self, word: &str, score: u32) {
        self.view.append_history_row(word, score);
        println!(
            "{} {} for {} {}",
            "✓".green().bold(),
            word.bright_white().bold(),
            score.to_string().bright_cyan(),
            if score == 1 { "point" } else { "points" }
        );
    }

    fn update_total(&mut self, total: u32) {
        self.view.update_total(total);
        if !self.view.history.is_empty() {
            println!("Total: {}", total.to_string().bright_cyan().bold());
        }
    }

    fn show_error(&mut self, message: &str) {
        self.view.show_error(message);
        println!("{} {}", "❌".red(), message.red());
    }

    fn clear_error(&mut self) {
        self.view.clear_error();
    }

    fn clear_history(&mut self) {
        self.view.clear_history();
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_simple(dealer: &mut Dealer) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(dealer, &mut stdin.lock())
}

/// Run the text game reading commands from `input`
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_simple_with<R: BufRead>(dealer: &mut Dealer, input: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Boggle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut game = Game::new(dealer.deal(), ConsolePresentation::new());
    game.port().print_board();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Some(Command::Click(index)) => {
                if game.on_tile_clicked(index).is_ok() {
                    game.port().print_board();
                }
            }
            Some(Command::Submit) => {
                if game.on_submit_clicked().is_ok() {
                    game.port().print_board();
                }
            }
            Some(Command::NewGame) => {
                game.restart(dealer.deal());
                println!("\n🔄 New game started!");
                game.port().print_board();
            }
            Some(Command::Board) => game.port().print_board(),
            Some(Command::Help) => print_help(),
            Some(Command::Quit) => break,
            None => println!("❌ Unrecognized input. Type 'help' for commands.\n"),
        }
    }

    let ledger = game.ledger();
    println!(
        "\n👋 Thanks for playing! {} {} for {} points.\n",
        ledger.len(),
        if ledger.len() == 1 { "word" } else { "words" },
        ledger.total()
    );
    Ok(())
}

fn print_help() {
    println!("Pick tiles to spell a word. Each tile must touch the one before it.");
    println!("  - Enter a tile as index 0-24 or as row,col (1-5), e.g. '2,3'");
    println!("  - Enter the last tile again to undo it");
    println!("  - Press Enter on an empty line (or 'submit') to score the word\n");
    println!("Commands: 'new' for a new board, 'board' to redraw, 'quit' to exit\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_indices() {
        assert_eq!(parse_command("0"), Some(Command::Click(0)));
        assert_eq!(parse_command(" 24 \n"), Some(Command::Click(24)));
        assert_eq!(parse_command("25"), None);
    }

    #[test]
    fn parses_row_col_pairs() {
        assert_eq!(parse_command("1,1"), Some(Command::Click(0)));
        assert_eq!(parse_command("2,3"), Some(Command::Click(7)));
        assert_eq!(parse_command("5 5"), Some(Command::Click(24)));
        assert_eq!(parse_command("0,1"), None);
        assert_eq!(parse_command("6,1"), None);
        assert_eq!(parse_command("a,b"), None);
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(""), Some(Command::Submit));
        assert_eq!(parse_command("SUBMIT"), Some(Command::Submit));
        assert_eq!(parse_command("new"), Some(Command::NewGame));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("?"), Some(Command::Help));
        assert_eq!(parse_command("board"), Some(Command::Board));
        assert_eq!(parse_command("xyzzy"), None);
    }

    #[test]
    fn scripted_session_runs_to_quit() {
        let mut dealer = Dealer::new(Some(1));
        let mut script = io::Cursor::new("0\n1\nsubmit\n0\n0\nnew\nnonsense\nquit\n");
        assert!(run_simple_with(&mut dealer, &mut script).is_ok());
    }

    #[test]
    fn end_of_input_ends_game() {
        let mut dealer = Dealer::new(Some(2));
        let mut script = io::Cursor::new("12\n");
        assert!(run_simple_with(&mut dealer, &mut script).is_ok());
    }

    #[test]
    fn console_keeps_view_in_sync() {
        let mut console = ConsolePresentation::new();
        console.render_tile(0, Tile::new('C').unwrap());
        console.set_tile_disabled(0, true);
        console.show_current_word("C");
        console.show_error("oops");

        assert!(console.view().disabled[0]);
        assert_eq!(console.view().current_word, "C");
        assert_eq!(console.view().error.as_deref(), Some("oops"));
    }
}
