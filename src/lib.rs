//! Board Tiling Puzzle Solver Library
//!
//! Covers a rectangular board exactly with a fixed set of ASCII-art pieces,
//! or proves that no exact cover exists. The core is a recursive backtracking
//! search over every piece orientation and position; around it sit the piece
//! shape model, the orientation generator, the board occupancy model, and
//! the puzzle file loader.

pub mod board;
pub mod geometry;
pub mod input;
pub mod persistence;
pub mod shape;
pub mod solver;
