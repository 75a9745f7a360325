//! Saving solve results to text files.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::board::format_board;
use crate::solver::Outcome;

/// Writes the final board, search time, and attempt count to `path`.
pub fn save_text(outcome: &Outcome, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    write!(file, "{}", format_board(&outcome.board))?;
    writeln!(file, "Search time: {} ms", outcome.elapsed.as_millis())?;
    writeln!(file, "Attempts: {}", outcome.attempts)?;
    Ok(())
}
