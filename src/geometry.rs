//! Planar transforms for piece shapes.
//!
//! A rectangle has eight symmetries (the dihedral group): four rotation
//! states, each with an optional mirror reflection. Symmetric pieces produce
//! fewer than eight distinct orientations.

use rustc_hash::FxHashSet;

use crate::shape::Shape;

/// Rotates a shape 90 degrees clockwise.
///
/// Cell (r, c) of an HxW grid moves to (c, H-1-r) of the WxH result.
pub fn rotate_cw(shape: &Shape) -> Shape {
    let (height, width) = (shape.height(), shape.width());
    let mut rotated = vec![vec![false; height]; width];

    for r in 0..height {
        for c in 0..width {
            if shape.is_filled(r, c) {
                rotated[c][height - 1 - r] = true;
            }
        }
    }

    Shape::from_parts(shape.label(), rotated)
}

/// Mirrors a shape about the vertical axis (reverses each row).
pub fn flip_horizontal(shape: &Shape) -> Shape {
    let mut cells: Vec<Vec<bool>> = shape.grid().to_vec();
    for row in &mut cells {
        row.reverse();
    }
    Shape::from_parts(shape.label(), cells)
}

/// Mirrors a shape about the horizontal axis (reverses row order).
pub fn flip_vertical(shape: &Shape) -> Shape {
    let mut cells: Vec<Vec<bool>> = shape.grid().to_vec();
    cells.reverse();
    Shape::from_parts(shape.label(), cells)
}

/// Generates all distinct orientations of a shape, the seed shape first.
///
/// Walks the four rotation states and adds both the plain and the
/// horizontally mirrored form of each. The vertical mirror equals the
/// horizontal mirror of the 180 degree rotation, so this covers the full
/// dihedral orbit. Duplicates are dropped by comparing cell grids, keeping
/// insertion order.
pub fn orientations(shape: &Shape) -> Vec<Shape> {
    let mut seen: FxHashSet<Vec<Vec<bool>>> = FxHashSet::default();
    let mut distinct = Vec::new();

    let mut current = shape.clone();
    for _ in 0..4 {
        for candidate in [current.clone(), flip_horizontal(&current)] {
            if seen.insert(candidate.grid().to_vec()) {
                distinct.push(candidate);
            }
        }
        current = rotate_cw(&current);
    }

    distinct
}
