//! Sudoku as exact cover.
//!
//! A puzzle with R×C boxes (N = R·C cells per side) becomes an instance over
//! `4·N²` constraint columns: every cell must be filled, every row, column and
//! box must contain every number, each exactly once. Every candidate placement
//! `(row, col, number)` is one matrix row covering exactly four columns. Cells
//! already filled in the input are forced into the search up front, so the
//! engine only ever explores the blanks.

use crate::cover::column_selection::{ColumnSelection, FewestCandidates};
use crate::cover::matrix::Matrix;
use crate::cover::search::{Search, SearchStats};
use itertools::iproduct;
use std::fmt::Display;
use std::io::{self, BufRead};
use std::path::Path;

/// The box dimensions of a puzzle: R rows by C columns per box, giving an
/// N×N grid with N = R·C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    box_rows: usize,
    box_cols: usize,
}

impl Shape {
    /// Creates a shape from box dimensions.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::BadShape`] if either dimension is zero.
    pub const fn new(box_rows: usize, box_cols: usize) -> Result<Self, PuzzleError> {
        if box_rows == 0 || box_cols == 0 {
            return Err(PuzzleError::BadShape { box_rows, box_cols });
        }
        Ok(Self { box_rows, box_cols })
    }

    /// Rows per box.
    #[must_use]
    pub const fn box_rows(&self) -> usize {
        self.box_rows
    }

    /// Columns per box.
    #[must_use]
    pub const fn box_cols(&self) -> usize {
        self.box_cols
    }

    /// The side length N of the grid.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.box_rows * self.box_cols
    }

    /// The box index of cell `(row, col)`.
    #[must_use]
    pub const fn box_of(&self, row: usize, col: usize) -> usize {
        (row / self.box_rows) * self.box_rows + col / self.box_cols
    }

    /// The matrix row handle of placement `(row, col, number)`. Handles are
    /// dense and follow the (row, col, number) sweep order of the encoder.
    const fn row_handle(&self, row: usize, col: usize, number: usize) -> usize {
        (row * self.side() + col) * self.side() + (number - 1)
    }

    /// The placement `(row, col, number)` of a matrix row handle.
    const fn row_triple(&self, handle: usize) -> (usize, usize, usize) {
        let side = self.side();
        let number = handle % side + 1;
        let col = (handle / side) % side;
        let row = handle / (side * side);
        (row, col, number)
    }
}

/// An N×N grid of values in `0..=N`, 0 meaning blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board(Vec<Vec<usize>>);

impl Board {
    /// Wraps a grid of rows.
    #[must_use]
    pub const fn new(rows: Vec<Vec<usize>>) -> Self {
        Self(rows)
    }

    /// The rows of the grid.
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.0
    }

    /// The value at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.0[row][col]
    }
}

impl From<Vec<Vec<usize>>> for Board {
    fn from(rows: Vec<Vec<usize>>) -> Self {
        Self::new(rows)
    }
}

impl From<Board> for Vec<Vec<usize>> {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl<const N: usize> From<[[usize; N]; N]> for Board {
    fn from(rows: [[usize; N]; N]) -> Self {
        Self::new(rows.iter().map(|row| row.to_vec()).collect())
    }
}

/// Errors surfaced while building or parsing a puzzle. All of these are
/// configuration errors in the sense that they are reported before any search
/// starts; an unsolvable puzzle is not an error but an empty solution
/// sequence.
#[derive(Debug)]
pub enum PuzzleError {
    /// Reading the puzzle file failed.
    Io(io::Error),
    /// The puzzle file contains no shape line.
    MissingShape,
    /// A box dimension is zero.
    BadShape {
        /// Rows per box as given.
        box_rows: usize,
        /// Columns per box as given.
        box_cols: usize,
    },
    /// The grid is not N×N for N = box\_rows · box\_cols.
    SideMismatch {
        /// The side length the shape demands.
        expected: usize,
        /// The number of rows or row entries found.
        found: usize,
    },
    /// A cell value lies outside `0..=N`.
    CellOutOfRange {
        /// Grid row of the offending cell.
        row: usize,
        /// Grid column of the offending cell.
        col: usize,
        /// The offending value.
        value: usize,
        /// The largest admissible value (N).
        max: usize,
    },
    /// A token in the puzzle file is neither a number nor a blank marker.
    BadToken {
        /// One-based line number in the file.
        line: usize,
        /// The offending token or line.
        token: String,
    },
}

impl Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingShape => write!(f, "puzzle file has no shape line"),
            Self::BadShape { box_rows, box_cols } => {
                write!(f, "box dimensions {box_rows}x{box_cols} are not positive")
            }
            Self::SideMismatch { expected, found } => {
                write!(f, "expected {expected} values per side, found {found}")
            }
            Self::CellOutOfRange {
                row,
                col,
                value,
                max,
            } => write!(
                f,
                "cell ({row}, {col}) holds {value}, outside the range 0..={max}"
            ),
            Self::BadToken { line, token } => {
                write!(f, "line {line}: cannot parse '{token}' as a cell value")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PuzzleError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A classic 9×9 puzzle with a unique solution (see [`EXAMPLE_NINE_SOLVED`]).
pub const EXAMPLE_NINE: [[usize; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

/// The unique solution of [`EXAMPLE_NINE`].
pub const EXAMPLE_NINE_SOLVED: [[usize; 9]; 9] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];

/// A 4×4 puzzle with 2×2 boxes.
pub const EXAMPLE_FOUR: [[usize; 4]; 4] = [
    [1, 0, 3, 0],
    [0, 4, 0, 2],
    [2, 0, 4, 0],
    [0, 3, 0, 1],
];

/// A 17-clue 9×9 puzzle, the minimum clue count for a unique solution. Hard
/// for humans, routine for the exact cover search; used by the benchmarks.
pub const EXAMPLE_SEVENTEEN_CLUE: [[usize; 9]; 9] = [
    [0, 0, 0, 0, 0, 0, 0, 1, 0],
    [4, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 2, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 5, 0, 4, 0, 7],
    [0, 0, 8, 0, 0, 0, 3, 0, 0],
    [0, 0, 1, 0, 9, 0, 0, 0, 0],
    [3, 0, 0, 4, 0, 0, 2, 0, 0],
    [0, 5, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 8, 0, 6, 0, 0, 0],
];

/// A Sudoku puzzle: a validated board together with its box shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sudoku {
    board: Board,
    shape: Shape,
}

impl Sudoku {
    /// Creates a puzzle after validating the board against the shape.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::SideMismatch`] if the grid is not N×N, or
    /// [`PuzzleError::CellOutOfRange`] if any cell lies outside `0..=N`.
    pub fn new(shape: Shape, board: Board) -> Result<Self, PuzzleError> {
        let side = shape.side();
        if board.rows().len() != side {
            return Err(PuzzleError::SideMismatch {
                expected: side,
                found: board.rows().len(),
            });
        }
        for (row, cells) in board.rows().iter().enumerate() {
            if cells.len() != side {
                return Err(PuzzleError::SideMismatch {
                    expected: side,
                    found: cells.len(),
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if value > side {
                    return Err(PuzzleError::CellOutOfRange {
                        row,
                        col,
                        value,
                        max: side,
                    });
                }
            }
        }
        Ok(Self { board, shape })
    }

    /// The underlying board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The box shape.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Encodes the puzzle's rules as an exact cover instance.
    ///
    /// The universe has `4·N²` columns: cell `(r, c)` filled, row `r` has
    /// number `n`, column `c` has number `n`, box `b` has number `n`. Every
    /// placement `(r, c, n)` is one matrix row covering exactly one column of
    /// each family. Givens are not encoded here; they are forced onto the
    /// search by [`Self::solutions`].
    #[must_use]
    pub fn to_exact_cover(&self) -> Matrix {
        let side = self.shape.side();
        let cell_base = 0;
        let row_base = side * side;
        let col_base = 2 * side * side;
        let box_base = 3 * side * side;

        let rows = iproduct!(0..side, 0..side, 1..=side).map(|(r, c, n)| {
            [
                cell_base + r * side + c,
                row_base + r * side + (n - 1),
                col_base + c * side + (n - 1),
                box_base + self.shape.box_of(r, c) * side + (n - 1),
            ]
        });

        Matrix::new(4 * side * side, rows)
    }

    /// Lazily enumerates every completion of the puzzle, using the default
    /// fewest-candidates heuristic. An inconsistent or unsolvable puzzle
    /// yields an empty sequence.
    #[must_use]
    pub fn solutions(&self) -> Solutions<FewestCandidates> {
        self.solutions_with(FewestCandidates)
    }

    /// Lazily enumerates every completion, branching with `selector`.
    #[must_use]
    pub fn solutions_with<C: ColumnSelection>(&self, selector: C) -> Solutions<C> {
        let mut search = Search::with_selector(self.to_exact_cover(), selector);
        for (row, cells) in self.board.rows().iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value != 0 {
                    // A refused pre-selection marks the search infeasible; the
                    // iterator then simply yields nothing.
                    search.preselect(self.shape.row_handle(row, col, value));
                }
            }
        }
        Solutions {
            base: self.clone(),
            search,
        }
    }

    /// Overlays the chosen placements onto a copy of this board.
    fn overlay(&self, chosen: &[usize]) -> Self {
        let mut board = self.board.clone();
        for &handle in chosen {
            let (row, col, number) = self.shape.row_triple(handle);
            board.0[row][col] = number;
        }
        Self {
            board,
            shape: self.shape,
        }
    }

    /// True if the grid is completely filled and every row, column and box
    /// contains each of `1..=N` exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let side = self.shape.side();
        let mut row_seen = vec![vec![false; side + 1]; side];
        let mut col_seen = vec![vec![false; side + 1]; side];
        let mut box_seen = vec![vec![false; side + 1]; side];

        for (row, cells) in self.board.rows().iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value == 0 || value > side {
                    return false;
                }
                let b = self.shape.box_of(row, col);
                if row_seen[row][value] || col_seen[col][value] || box_seen[b][value] {
                    return false;
                }
                row_seen[row][value] = true;
                col_seen[col][value] = true;
                box_seen[b][value] = true;
            }
        }
        true
    }
}

impl Display for Sudoku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = self.shape.side();
        let width = side.to_string().len();
        let segment = "-".repeat(self.shape.box_cols * (width + 1) + 1);
        let mut rule = String::from("+");
        for _ in 0..side / self.shape.box_cols {
            rule.push_str(&segment);
            rule.push('+');
        }

        for (row, cells) in self.board.rows().iter().enumerate() {
            if row % self.shape.box_rows == 0 {
                writeln!(f, "{rule}")?;
            }
            for (col, &value) in cells.iter().enumerate() {
                if col % self.shape.box_cols == 0 {
                    write!(f, "| ")?;
                }
                if value == 0 {
                    write!(f, "{:>width$} ", ".")?;
                } else {
                    write!(f, "{value:>width$} ")?;
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{rule}")
    }
}

/// A lazy stream of puzzle completions, one [`Sudoku`] per exact cover found.
#[derive(Debug)]
pub struct Solutions<C: ColumnSelection = FewestCandidates> {
    base: Sudoku,
    search: Search<C>,
}

impl<C: ColumnSelection> Solutions<C> {
    /// Work counters of the underlying search.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.search.stats()
    }

    /// True if the givens already conflict; such a stream yields nothing.
    #[must_use]
    pub const fn is_infeasible(&self) -> bool {
        self.search.is_infeasible()
    }
}

impl<C: ColumnSelection> Iterator for Solutions<C> {
    type Item = Sudoku;

    fn next(&mut self) -> Option<Self::Item> {
        self.search.next().map(|chosen| self.base.overlay(&chosen))
    }
}

/// Parses a puzzle from a `BufRead` source.
///
/// The format: comment lines start with 'c'; the first significant line holds
/// the box dimensions as `R C`; the following N = R·C lines each hold N cell
/// tokens, where `.`, `_` and `0` all denote a blank.
///
/// # Errors
///
/// Any [`PuzzleError`] variant except `Io`: a missing or malformed shape line,
/// unparsable cell tokens, wrong grid dimensions, or out-of-range values.
pub fn parse_sudoku<R: BufRead>(reader: R) -> Result<Sudoku, PuzzleError> {
    let mut shape: Option<Shape> = None;
    let mut rows: Vec<Vec<usize>> = Vec::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line_str = line_result?;
        let line_no = idx + 1;
        let trimmed = line_str.trim();
        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }

        if shape.is_none() {
            let dims: Vec<&str> = trimmed.split_whitespace().collect();
            if dims.len() != 2 {
                return Err(PuzzleError::BadToken {
                    line: line_no,
                    token: trimmed.to_owned(),
                });
            }
            let box_rows = parse_dimension(dims[0], line_no)?;
            let box_cols = parse_dimension(dims[1], line_no)?;
            shape = Some(Shape::new(box_rows, box_cols)?);
            continue;
        }

        let cells = trimmed
            .split_whitespace()
            .map(|token| parse_cell(token, line_no))
            .collect::<Result<Vec<usize>, PuzzleError>>()?;
        rows.push(cells);
    }

    let shape = shape.ok_or(PuzzleError::MissingShape)?;
    Sudoku::new(shape, Board::new(rows))
}

/// Parses a puzzle file specified by its path.
///
/// # Errors
///
/// [`PuzzleError::Io`] if the file cannot be opened or read; otherwise as
/// [`parse_sudoku`].
pub fn parse_sudoku_file(file_path: &Path) -> Result<Sudoku, PuzzleError> {
    let file = std::fs::File::open(file_path)?;
    parse_sudoku(io::BufReader::new(file))
}

fn parse_dimension(token: &str, line: usize) -> Result<usize, PuzzleError> {
    token.parse::<usize>().map_err(|_| PuzzleError::BadToken {
        line,
        token: token.to_owned(),
    })
}

fn parse_cell(token: &str, line: usize) -> Result<usize, PuzzleError> {
    if token == "." || token == "_" {
        return Ok(0);
    }
    token.parse::<usize>().map_err(|_| PuzzleError::BadToken {
        line,
        token: token.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn puzzle(shape: (usize, usize), grid: Vec<Vec<usize>>) -> Sudoku {
        let shape = Shape::new(shape.0, shape.1).unwrap();
        Sudoku::new(shape, Board::new(grid)).unwrap()
    }

    fn grid_of<const N: usize>(rows: [[usize; N]; N]) -> Vec<Vec<usize>> {
        rows.iter().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn test_classic_nine_has_unique_solution() {
        let sudoku = puzzle((3, 3), grid_of(EXAMPLE_NINE));
        let solutions: Vec<_> = sudoku.solutions().collect();

        assert_eq!(solutions.len(), 1);
        let solved = &solutions[0];
        assert_eq!(solved.board().rows()[0], vec![5, 3, 4, 6, 7, 8, 9, 1, 2]);
        assert_eq!(solved.board().rows()[8], vec![3, 4, 5, 2, 8, 6, 1, 7, 9]);
        assert_eq!(solved.board().rows(), grid_of(EXAMPLE_NINE_SOLVED));
    }

    #[test]
    fn test_solved_grid_round_trips() {
        let sudoku = puzzle((3, 3), grid_of(EXAMPLE_NINE_SOLVED));
        let solutions: Vec<_> = sudoku.solutions().collect();

        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0], sudoku);
    }

    #[test]
    fn test_duplicate_in_row_yields_zero_solutions() {
        let mut grid = vec![vec![0; 9]; 9];
        grid[0][0] = 5;
        grid[0][1] = 5;
        let sudoku = puzzle((3, 3), grid);

        let mut solutions = sudoku.solutions();
        assert!(solutions.next().is_none());
        assert!(solutions.is_infeasible());
    }

    #[test]
    fn test_duplicate_in_box_yields_zero_solutions() {
        let mut grid = vec![vec![0; 9]; 9];
        grid[0][0] = 7;
        grid[1][1] = 7;
        let sudoku = puzzle((3, 3), grid);

        assert_eq!(sudoku.solutions().count(), 0);
    }

    #[test]
    fn test_one_by_one_blank_puzzle() {
        let sudoku = puzzle((1, 1), vec![vec![0]]);
        let solutions: Vec<_> = sudoku.solutions().collect();

        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].board().rows(), vec![vec![1]]);
    }

    #[test]
    fn test_empty_two_by_two_enumerates_latin_squares() {
        // With 1x2 boxes the box constraints coincide with the rows; the
        // completions of the empty 2x2 grid are the two Latin squares.
        let sudoku = puzzle((1, 2), vec![vec![0, 0], vec![0, 0]]);
        let solutions: Vec<_> = sudoku.solutions().collect();

        assert_eq!(solutions.len(), 2);
        for solved in &solutions {
            assert!(solved.is_solved());
        }
    }

    #[test]
    fn test_empty_four_by_four_enumerates_all_grids() {
        // The number of complete 4x4 Sudoku grids is known to be 288.
        let sudoku = puzzle((2, 2), vec![vec![0; 4]; 4]);
        let mut count = 0;
        for solved in sudoku.solutions() {
            assert!(solved.is_solved());
            count += 1;
        }
        assert_eq!(count, 288);
    }

    #[test]
    fn test_example_four_solvable() {
        let sudoku = puzzle((2, 2), grid_of(EXAMPLE_FOUR));
        let solved = sudoku.solutions().next().expect("puzzle must be solvable");

        assert!(solved.is_solved());
        // Givens survive the overlay untouched.
        assert_eq!(solved.board().get(0, 0), 1);
        assert_eq!(solved.board().get(3, 3), 1);
    }

    #[test]
    fn test_solutions_are_lazy() {
        let sudoku = puzzle((2, 2), vec![vec![0; 4]; 4]);
        let mut solutions = sudoku.solutions();

        assert!(solutions.next().is_some());
        assert_eq!(solutions.stats().solutions, 1);
    }

    #[test]
    fn test_zero_shape_rejected() {
        assert!(matches!(
            Shape::new(0, 3),
            Err(PuzzleError::BadShape { .. })
        ));
    }

    #[test]
    fn test_side_mismatch_rejected() {
        let shape = Shape::new(2, 2).unwrap();
        let result = Sudoku::new(shape, Board::new(vec![vec![0; 3]; 3]));
        assert!(matches!(
            result,
            Err(PuzzleError::SideMismatch {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn test_cell_out_of_range_rejected() {
        let shape = Shape::new(1, 2).unwrap();
        let result = Sudoku::new(shape, Board::new(vec![vec![3, 0], vec![0, 0]]));
        assert!(matches!(
            result,
            Err(PuzzleError::CellOutOfRange {
                row: 0,
                col: 0,
                value: 3,
                max: 2
            })
        ));
    }

    #[test]
    fn test_cover_encoding_shape() {
        let sudoku = puzzle((2, 3), vec![vec![0; 6]; 6]);
        let matrix = sudoku.to_exact_cover();

        assert_eq!(matrix.num_columns(), 4 * 6 * 6);
        assert_eq!(matrix.num_rows(), 6 * 6 * 6);
        // Placement (1, 4, 2): cell 10, row-number 6+1, col-number 4*6+1,
        // box-number for box (1/2)*2 + 4/3 = 1.
        let handle = (6 + 4) * 6 + 1;
        assert_eq!(
            matrix.row(handle),
            &[10, 36 + 7, 72 + 25, 108 + 7]
        );
    }

    #[test]
    fn test_is_solved_detects_violations() {
        assert!(puzzle((3, 3), grid_of(EXAMPLE_NINE_SOLVED)).is_solved());
        assert!(!puzzle((3, 3), grid_of(EXAMPLE_NINE)).is_solved());

        let mut twisted = grid_of(EXAMPLE_NINE_SOLVED);
        twisted[0][0] = twisted[0][1];
        assert!(!puzzle((3, 3), twisted).is_solved());
    }

    #[test]
    fn test_parse_sudoku_text() {
        let text = "c 4x4 example\n\
                    2 2\n\
                    1 . 3 .\n\
                    . 4 . 2\n\
                    2 . 4 .\n\
                    . 3 . 1\n";
        let sudoku = parse_sudoku(Cursor::new(text)).unwrap();

        assert_eq!(sudoku.shape(), Shape::new(2, 2).unwrap());
        assert_eq!(sudoku.board().rows(), grid_of(EXAMPLE_FOUR));
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let text = "1 2\n1 x\n2 1\n";
        assert!(matches!(
            parse_sudoku(Cursor::new(text)),
            Err(PuzzleError::BadToken { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_missing_shape() {
        assert!(matches!(
            parse_sudoku(Cursor::new("c only comments\n")),
            Err(PuzzleError::MissingShape)
        ));
    }

    #[test]
    fn test_parse_rejects_short_grid() {
        let text = "2 2\n1 . 3 .\n. 4 . 2\n";
        assert!(matches!(
            parse_sudoku(Cursor::new(text)),
            Err(PuzzleError::SideMismatch {
                expected: 4,
                found: 2
            })
        ));
    }

    #[test]
    fn test_display_marks_blanks_and_boxes() {
        let sudoku = puzzle((3, 3), grid_of(EXAMPLE_NINE));
        let rendered = format!("{sudoku}");

        assert!(rendered.contains("| 5 3 . |"));
        assert!(rendered.contains("+-------+-------+-------+"));
    }
}
