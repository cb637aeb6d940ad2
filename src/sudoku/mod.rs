#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides functionality for solving Sudoku puzzles via exact
//! cover.

/// The `solver` module contains the puzzle types, the exact cover encoding and
/// the solution decoding.
pub mod solver;
