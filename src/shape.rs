//! Puzzle piece shapes and puzzle definitions.
//!
//! A shape is parsed from rows of ASCII art: every character other than a
//! space marks a filled cell, and the symbol of the first filled cell in
//! row-major order becomes the piece's label.

/// Character treated as a blank cell in piece text.
pub const BLANK: char = ' ';

/// Sentinel label for a shape with no filled cell to take a symbol from.
pub const UNKNOWN_LABEL: char = '?';

/// A piece shape: a rectangular grid of filled cells plus its label.
///
/// Input rows shorter than the widest row are padded with blanks on the
/// right, so the grid is always rectangular. Shapes are immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    label: char,
    cells: Vec<Vec<bool>>,
}

impl Shape {
    /// Builds a shape from raw text rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);

        let mut label = None;
        let mut cells = Vec::with_capacity(rows.len());
        for row in rows {
            let mut cell_row = vec![false; width];
            for (col, symbol) in row.as_ref().chars().enumerate() {
                if symbol != BLANK {
                    cell_row[col] = true;
                    if label.is_none() {
                        label = Some(symbol);
                    }
                }
            }
            cells.push(cell_row);
        }

        Self {
            label: label.unwrap_or(UNKNOWN_LABEL),
            cells,
        }
    }

    /// Rebuilds a shape from an already rectangular cell grid, keeping the
    /// label of the shape it was derived from.
    pub fn from_parts(label: char, cells: Vec<Vec<bool>>) -> Self {
        debug_assert!(cells.windows(2).all(|pair| pair[0].len() == pair[1].len()));
        Self { label, cells }
    }

    /// The identifying symbol of this piece.
    pub fn label(&self) -> char {
        self.label
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// True if the cell at (row, col) is filled.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Number of filled cells.
    pub fn area(&self) -> usize {
        self.cells.iter().flatten().filter(|&&filled| filled).count()
    }

    /// The cell grid, row-major.
    pub fn grid(&self) -> &[Vec<bool>] {
        &self.cells
    }
}

/// A puzzle instance: board dimensions plus the pieces in try-order.
///
/// The piece order is fixed and significant for search performance (and for
/// which solution is found first), but not for completeness.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub rows: usize,
    pub cols: usize,
    pub shapes: Vec<Shape>,
}

impl Puzzle {
    pub fn new(rows: usize, cols: usize, shapes: Vec<Shape>) -> Self {
        Self { rows, cols, shapes }
    }

    /// Total filled-cell count across all pieces.
    pub fn piece_area(&self) -> usize {
        self.shapes.iter().map(Shape::area).sum()
    }

    /// True if the pieces could exactly cover the board.
    ///
    /// An exact cover requires the piece area to equal the board area. The
    /// solver does not depend on this check; callers can use it to reject
    /// impossible puzzles without searching.
    pub fn area_matches(&self) -> bool {
        self.piece_area() == self.rows * self.cols
    }
}
