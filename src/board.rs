//! Board occupancy model for the tiling search.
//!
//! The board is a flat row-major grid of cells, each empty or holding the
//! label of a placed piece. Placements and removals are always paired by the
//! solver; removal never searches the board for what to undo.

use crate::shape::Shape;

/// One board cell: empty, or covered by the piece with the given label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Label(char),
}

/// A mutable rows x cols grid of cells, all empty at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at (row, col). Panics when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    /// True iff every filled cell of `shape`, anchored with its top-left
    /// corner at (row, col), lands inside the board on an empty cell.
    pub fn can_place(&self, shape: &Shape, row: usize, col: usize) -> bool {
        for r in 0..shape.height() {
            for c in 0..shape.width() {
                if !shape.is_filled(r, c) {
                    continue;
                }
                let (board_row, board_col) = (row + r, col + c);
                if board_row >= self.rows || board_col >= self.cols {
                    return false;
                }
                if self.cells[board_row * self.cols + board_col] != Cell::Empty {
                    return false;
                }
            }
        }
        true
    }

    /// Writes `label` into every cell covered by `shape` at (row, col).
    ///
    /// Callers must have verified the placement with [`Board::can_place`];
    /// placing onto an occupied cell is a contract violation.
    pub fn place(&mut self, shape: &Shape, row: usize, col: usize, label: char) {
        for r in 0..shape.height() {
            for c in 0..shape.width() {
                if shape.is_filled(r, c) {
                    let index = (row + r) * self.cols + (col + c);
                    debug_assert_eq!(
                        self.cells[index],
                        Cell::Empty,
                        "placement overlaps an occupied cell"
                    );
                    self.cells[index] = Cell::Label(label);
                }
            }
        }
    }

    /// Undoes a matching [`Board::place`] call with identical arguments.
    pub fn remove(&mut self, shape: &Shape, row: usize, col: usize) {
        for r in 0..shape.height() {
            for c in 0..shape.width() {
                if shape.is_filled(r, c) {
                    let index = (row + r) * self.cols + (col + c);
                    debug_assert_ne!(
                        self.cells[index],
                        Cell::Empty,
                        "removal from an empty cell"
                    );
                    self.cells[index] = Cell::Empty;
                }
            }
        }
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }
}

/// Formats a board as one character per cell, `.` for empty.
pub fn format_board(board: &Board) -> String {
    let mut output = String::with_capacity(board.rows() * (board.cols() + 1));
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            output.push(match board.cell(row, col) {
                Cell::Empty => '.',
                Cell::Label(label) => label,
            });
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_tromino() -> Shape {
        Shape::from_rows(&["B", "BB"])
    }

    #[test]
    fn test_can_place_on_empty_board() {
        let board = Board::new(2, 2);
        assert!(board.can_place(&corner_tromino(), 0, 0));
    }

    #[test]
    fn test_can_place_rejects_out_of_bounds() {
        let board = Board::new(2, 2);
        assert!(!board.can_place(&corner_tromino(), 1, 0));
        assert!(!board.can_place(&corner_tromino(), 0, 1));
    }

    #[test]
    fn test_can_place_rejects_overlap_but_allows_blank_overhang() {
        let mut board = Board::new(2, 2);
        board.place(&corner_tromino(), 0, 0, 'B');

        // the single remaining empty cell is (0, 1)
        let dot = Shape::from_rows(&["A"]);
        assert!(!board.can_place(&dot, 0, 0));
        assert!(board.can_place(&dot, 0, 1));
    }

    #[test]
    fn test_place_then_remove_restores_board() {
        let mut board = Board::new(3, 3);
        board.place(&Shape::from_rows(&["AAA"]), 0, 0, 'A');
        let before = board.clone();

        let shape = corner_tromino();
        board.place(&shape, 1, 0, 'B');
        assert_ne!(board, before);
        board.remove(&shape, 1, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2, 2);
        assert!(!board.is_full());
        board.place(&Shape::from_rows(&["AA", "AA"]), 0, 0, 'A');
        assert!(board.is_full());
    }

    #[test]
    fn test_format_board_shows_labels_and_empties() {
        let mut board = Board::new(2, 2);
        board.place(&corner_tromino(), 0, 0, 'B');
        assert_eq!(format_board(&board), "B.\nBB\n");
    }
}
