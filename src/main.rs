//! Board Tiling Puzzle Solver
//!
//! Reads a puzzle file describing a rectangular board and a set of ASCII-art
//! pieces, then searches for an exact cover by backtracking over every piece
//! orientation and position. Solutions are printed with terminal colors and
//! can be exported as text or PNG.

mod visualization;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tiler::board::format_board;
use tiler::{input, persistence, solver};

/// Solves a rectangular board tiling puzzle from a text description.
#[derive(Parser)]
#[command(name = "tiler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle file to solve.
    input: PathBuf,

    /// Write the solution board, time, and attempt count to a text file.
    #[arg(long, value_name = "FILE")]
    text: Option<PathBuf>,

    /// Export the solution board as a PNG image.
    #[arg(long, value_name = "FILE")]
    image: Option<PathBuf>,

    /// Print the board without ANSI colors.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let puzzle = match input::load_puzzle(&cli.input) {
        Ok(puzzle) => puzzle,
        Err(error) => {
            eprintln!("Invalid puzzle: {error}");
            return ExitCode::FAILURE;
        }
    };

    // fast reject: an exact cover needs piece area equal to board area
    if !puzzle.area_matches() {
        println!(
            "Piece area {} does not match board area {}.",
            puzzle.piece_area(),
            puzzle.rows * puzzle.cols
        );
        println!("No solution found.");
        return ExitCode::SUCCESS;
    }

    let outcome = solver::solve(&puzzle);

    if outcome.solved {
        if cli.no_color {
            print!("{}", format_board(&outcome.board));
        } else {
            print!("{}", visualization::render_ansi(&outcome.board));
        }
    } else {
        println!("No solution found.");
    }
    println!("Search time: {} ms", outcome.elapsed.as_millis());
    println!("Attempts: {}", outcome.attempts);

    if outcome.solved {
        if let Some(path) = &cli.text {
            match persistence::save_text(&outcome, path) {
                Ok(()) => println!("Wrote {}", path.display()),
                Err(error) => eprintln!("Failed to save solution text: {error}"),
            }
        }
        if let Some(path) = &cli.image {
            match visualization::export_png(&outcome.board, path) {
                Ok(()) => println!("Wrote {}", path.display()),
                Err(error) => eprintln!("Failed to save solution image: {error}"),
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3 3 3\nDEFAULT\nAAA\nB\nBB\nCC\n C\n";

    #[test]
    fn test_sample_solution_snapshot() {
        let puzzle = input::parse_puzzle(SAMPLE).unwrap();
        let outcome = solver::solve(&puzzle);
        assert!(outcome.solved);

        let output = format!(
            "{}Attempts: {}\n",
            format_board(&outcome.board),
            outcome.attempts
        );
        insta::assert_snapshot!(output, @r"
        AAA
        BCC
        BBC
        Attempts: 8
        ");
    }

    #[test]
    fn test_sample_renders_with_color_codes() {
        let puzzle = input::parse_puzzle(SAMPLE).unwrap();
        let outcome = solver::solve(&puzzle);
        let rendered = visualization::render_ansi(&outcome.board);
        assert!(rendered.contains("\u{1b}[31mA\u{1b}[0m"));
        assert!(rendered.contains("\u{1b}[32mB\u{1b}[0m"));
        assert!(rendered.contains("\u{1b}[33mC\u{1b}[0m"));
    }
}
