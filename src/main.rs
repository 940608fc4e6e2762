//! Boggle - CLI
//!
//! Boggle-style word game with TUI and plain text modes, plus board statistics.

use anyhow::{Result, bail};
use boggle_board::{
    commands::{run_board_stats, run_simple},
    core::Dealer,
    output::{print_board, print_board_stats},
};
use clap::{Parser, Subcommand};
use log::debug;

#[derive(Parser, Debug)]
#[command(
    name = "boggle",
    about = "Find words on a 5x5 board of letter dice",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for board generation (same seed, same boards)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type tile positions instead of using the TUI)
    Simple,

    /// Deal one board, print it and exit
    Show,

    /// Deal many boards and compare letter and placement frequencies with the dice
    Stats {
        /// Number of boards to deal
        #[arg(short = 'n', long, default_value = "100000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();
    debug!("Command line options: {cli:?}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.seed),
        Commands::Simple => run_simple(&mut Dealer::new(cli.seed)),
        Commands::Show => {
            run_show_command(cli.seed);
            Ok(())
        }
        Commands::Stats { count } => run_stats_command(count, cli.seed),
    }
}

fn run_play_command(seed: Option<u64>) -> Result<()> {
    use boggle_board::interactive::{App, run_tui};

    let app = App::new(Dealer::new(seed));
    run_tui(app)
}

fn run_show_command(seed: Option<u64>) {
    let board = Dealer::new(seed).deal();
    print_board(&board, seed);
}

fn run_stats_command(count: usize, seed: Option<u64>) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }

    let seed = seed.unwrap_or_else(rand::random);
    println!("Dealing {count} boards...");

    let stats = run_board_stats(count, seed);
    print_board_stats(&stats);
    Ok(())
}
