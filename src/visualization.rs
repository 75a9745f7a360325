//! Terminal and image rendering of solved boards.
//!
//! Presentation only: consumes the final board state and never feeds back
//! into the search. The label-to-color tables live here, not in the core.

use std::path::Path;

use image::{Rgb, RgbImage};

use tiler::board::{Board, Cell};

/// ANSI color codes for labels `A`..=`Z`.
const ANSI_CODES: [&str; 26] = [
    "\u{1b}[31m", "\u{1b}[32m", "\u{1b}[33m", "\u{1b}[34m", "\u{1b}[35m",
    "\u{1b}[36m", "\u{1b}[91m", "\u{1b}[92m", "\u{1b}[93m", "\u{1b}[94m",
    "\u{1b}[95m", "\u{1b}[96m", "\u{1b}[97m", "\u{1b}[90m", "\u{1b}[100m",
    "\u{1b}[101m", "\u{1b}[102m", "\u{1b}[103m", "\u{1b}[104m", "\u{1b}[105m",
    "\u{1b}[106m", "\u{1b}[107m", "\u{1b}[37m", "\u{1b}[95m", "\u{1b}[94m",
    "\u{1b}[92m",
];

const ANSI_RESET: &str = "\u{1b}[0m";

/// RGB colors for labels `A`..=`Z` in exported images.
const LABEL_COLORS: [[u8; 3]; 26] = [
    [255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 0], [255, 165, 0],
    [255, 20, 147], [0, 255, 255], [128, 0, 128], [165, 42, 42], [255, 192, 203],
    [0, 128, 0], [75, 0, 130], [128, 128, 0], [255, 69, 0], [0, 191, 255],
    [46, 139, 87], [255, 105, 180], [218, 112, 214], [112, 128, 144], [240, 230, 140],
    [139, 69, 19], [47, 79, 79], [60, 179, 113], [123, 104, 238], [176, 224, 230],
    [199, 21, 133],
];

/// Pixel size of one board cell in exported images.
const CELL_SIZE: u32 = 50;

/// Table index for an uppercase label, `None` for anything else.
fn color_index(label: char) -> Option<usize> {
    label
        .is_ascii_uppercase()
        .then(|| (label as u8 - b'A') as usize)
}

/// Renders the board with one ANSI-colored character per cell.
///
/// Empty cells show as a plain `.`; labels outside `A`..=`Z` print uncolored.
pub fn render_ansi(board: &Board) -> String {
    let mut output = String::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            match board.cell(row, col) {
                Cell::Empty => output.push('.'),
                Cell::Label(label) => match color_index(label) {
                    Some(index) => {
                        output.push_str(ANSI_CODES[index]);
                        output.push(label);
                        output.push_str(ANSI_RESET);
                    }
                    None => output.push(label),
                },
            }
        }
        output.push('\n');
    }
    output
}

/// Rasterizes the board: one solid square per cell with black grid lines.
pub fn render_image(board: &Board) -> RgbImage {
    let width = board.cols() as u32 * CELL_SIZE;
    let height = board.rows() as u32 * CELL_SIZE;
    let mut image = RgbImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let row = (y / CELL_SIZE) as usize;
            let col = (x / CELL_SIZE) as usize;
            let on_grid_line =
                x % CELL_SIZE == 0 || y % CELL_SIZE == 0 || x == width - 1 || y == height - 1;
            let pixel = if on_grid_line {
                [0, 0, 0]
            } else {
                match board.cell(row, col) {
                    Cell::Empty => [255, 255, 255],
                    Cell::Label(label) => {
                        color_index(label).map_or([255, 255, 255], |index| LABEL_COLORS[index])
                    }
                }
            };
            image.put_pixel(x, y, Rgb(pixel));
        }
    }

    image
}

/// Exports the board as a PNG file.
pub fn export_png(board: &Board, path: &Path) -> image::ImageResult<()> {
    render_image(board).save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiler::shape::Shape;

    fn one_by_two_board() -> Board {
        let mut board = Board::new(1, 2);
        board.place(&Shape::from_rows(&["A"]), 0, 0, 'A');
        board
    }

    #[test]
    fn test_ansi_render_colors_labels_and_leaves_empties_plain() {
        let rendered = render_ansi(&one_by_two_board());
        assert_eq!(rendered, "\u{1b}[31mA\u{1b}[0m.\n");
    }

    #[test]
    fn test_image_dimensions_and_colors() {
        let image = render_image(&one_by_two_board());
        assert_eq!(image.dimensions(), (100, 50));
        // grid line corner is black, cell interiors carry the cell colors
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(25, 25).0, [255, 0, 0]);
        assert_eq!(image.get_pixel(75, 25).0, [255, 255, 255]);
    }
}
