//! Display functions for command results

use super::formatters::{create_progress_bar, deviation_pct};
use crate::commands::BoardStatistics;
use crate::core::Board;
use crate::core::adjacency::GRID_WIDTH;
use colored::Colorize;

/// Print a freshly dealt board
pub fn print_board(board: &Board, seed: Option<u64>) {
    println!("\n{}", "─".repeat(30).cyan());
    match seed {
        Some(seed) => println!(" {} (seed {seed})", "BOARD".bright_cyan().bold()),
        None => println!(" {}", "BOARD".bright_cyan().bold()),
    }
    println!("{}", "─".repeat(30).cyan());

    for row in 0..GRID_WIDTH {
        let cells: Vec<String> = board
            .row(row)
            .iter()
            .map(|tile| format!("{tile:<3}").bright_white().bold().to_string())
            .collect();
        println!("   {}", cells.join(" "));
    }
    println!();
}

/// Print the result of a statistics run
pub fn print_board_stats(stats: &BoardStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BOARD STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Boards dealt:     {}", stats.boards);
    println!("   Seed:             {}", stats.seed);
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
    println!("   Boards/second:    {:.0}", stats.boards_per_second);

    println!("\n🔤 {}", "Letter frequency (observed vs expected):".bright_cyan().bold());
    let max = stats
        .letters
        .iter()
        .map(|l| l.observed.max(l.expected))
        .fold(0.0, f64::max);
    for freq in &stats.letters {
        let bar = create_progress_bar(freq.observed, max, 30);
        let dev = deviation_pct(freq.observed, freq.expected);
        let dev_str = format!("{dev:+6.1}%");
        let colored_dev = if dev.abs() < 2.0 {
            dev_str.green()
        } else if dev.abs() < 5.0 {
            dev_str.yellow()
        } else {
            dev_str.red()
        };
        let label = if freq.letter == 'Q' {
            "Qu".to_string()
        } else {
            freq.letter.to_string()
        };
        println!(
            "   {label:<2} {} {:6.3}% / {:6.3}% {colored_dev}",
            bar.green(),
            freq.observed * 100.0,
            freq.expected * 100.0
        );
    }

    println!("\n🎲 {}", "Placement:".bright_cyan().bold());
    println!(
        "   Boards with Qu:   {:.2}% (expected {:.2}%)",
        stats.qu_rate * 100.0,
        stats.expected_qu_rate * 100.0
    );
    let placement = format!("{:.1}%", stats.max_placement_deviation * 100.0);
    let placement = if stats.max_placement_deviation < 0.1 {
        placement.green()
    } else {
        placement.yellow()
    };
    println!("   Worst die/cell deviation: {placement}");
}
