//! Recursive backtracking search for an exact board cover.
//!
//! Pieces are tried in input order. For each piece, every distinct
//! orientation is tried at every position where its bounding box fits on the
//! board; a successful placement recurses on the next piece and is undone
//! when that branch fails. The first complete cover found is returned.

use std::time::{Duration, Instant};

use crate::board::Board;
use crate::geometry::orientations;
use crate::shape::{Puzzle, Shape};

/// Result of a single [`solve`] call.
#[derive(Debug)]
pub struct Outcome {
    /// Whether an exact cover was found.
    pub solved: bool,
    /// The final board: a complete cover on success, scratch state otherwise.
    pub board: Board,
    /// Number of `can_place` evaluations, successful or not.
    pub attempts: u64,
    /// Wall-clock duration of the search.
    pub elapsed: Duration,
}

/// Searches for an exact cover of the puzzle board.
///
/// Deterministic: the same puzzle always yields the same verdict, board, and
/// attempt count. Candidate positions are restricted to those where the
/// oriented piece's bounding box fits on the board, which the attempt counter
/// reflects: positions a piece could never occupy are not counted.
pub fn solve(puzzle: &Puzzle) -> Outcome {
    let start = Instant::now();

    // the orbit of each piece is board-independent, so compute it once up front
    let orientation_sets: Vec<Vec<Shape>> = puzzle.shapes.iter().map(orientations).collect();

    let mut board = Board::new(puzzle.rows, puzzle.cols);
    let mut attempts = 0;
    let solved = place_piece(&mut board, &orientation_sets, 0, &mut attempts);

    Outcome {
        solved,
        board,
        attempts,
        elapsed: start.elapsed(),
    }
}

fn place_piece(
    board: &mut Board,
    orientation_sets: &[Vec<Shape>],
    index: usize,
    attempts: &mut u64,
) -> bool {
    if index == orientation_sets.len() {
        return board.is_full();
    }

    for oriented in &orientation_sets[index] {
        if oriented.height() == 0 || oriented.width() == 0 {
            // degenerate grids can never cover anything
            continue;
        }
        // skip orientations whose bounding box exceeds the board
        let Some(max_row) = board.rows().checked_sub(oriented.height()) else {
            continue;
        };
        let Some(max_col) = board.cols().checked_sub(oriented.width()) else {
            continue;
        };

        for row in 0..=max_row {
            for col in 0..=max_col {
                *attempts += 1;
                if !board.can_place(oriented, row, col) {
                    continue;
                }
                board.place(oriented, row, col, oriented.label());
                if place_piece(board, orientation_sets, index + 1, attempts) {
                    return true;
                }
                board.remove(oriented, row, col);
            }
        }
    }

    false
}
