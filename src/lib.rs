//! This crate provides an exact cover solver (Knuth's Algorithm X) and a Sudoku
//! front end built on top of it.
//!
//! The [`cover`] module is the generic engine: an incidence matrix of candidate
//! rows over constraint columns, and a lazy backtracking search that enumerates
//! every selection of rows covering each column exactly once. The [`sudoku`]
//! module translates puzzles of arbitrary box size into exact cover instances
//! and overlays the covers it finds back onto the grid.
//!
//! ```
//! use xcover::cover::matrix::Matrix;
//! use xcover::cover::search::Search;
//!
//! // Three columns; rows 0 and 2 together cover each column exactly once.
//! let matrix = Matrix::new(3, [vec![0, 2], vec![0, 1, 2], vec![1]]);
//! let solutions: Vec<_> = Search::new(matrix).collect();
//!
//! assert_eq!(solutions, vec![vec![0, 2], vec![1]]);
//! ```

/// The `cover` module implements the exact cover engine: the row table, the
/// live column index with its select/deselect primitives, and the search.
pub mod cover;

/// The `sudoku` module implements the Sudoku puzzle adapter, which encodes a
/// grid as an exact cover instance and decodes covers back into filled grids.
pub mod sudoku;
