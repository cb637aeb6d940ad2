#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The immutable row table of an exact cover instance.
//!
//! A [`Matrix`] records, for every candidate row, the ordered list of
//! constraint columns that row would satisfy if chosen. Rows and columns are
//! dense `usize` handles. The table is built once per instance and never
//! mutated during search; all mutable bookkeeping lives in
//! [`crate::cover::index::ColumnIndex`].

use smallvec::SmallVec;

/// Per-row column storage. Sudoku rows cover exactly four columns, so four
/// inline slots keep the common case off the heap.
pub type ColumnSet = SmallVec<[usize; 4]>;

/// An exact cover instance: candidate rows over a fixed column universe.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    rows: Vec<ColumnSet>,
    num_columns: usize,
}

impl Matrix {
    /// Creates a matrix over `num_columns` columns from an iterator of rows,
    /// each row being the columns it covers.
    ///
    /// Row handles are assigned in iteration order, starting at zero. A column
    /// repeated within a single row is kept once, at its first position.
    ///
    /// # Panics
    ///
    /// If any row references a column outside `0..num_columns`.
    pub fn new<I, R>(num_columns: usize, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = usize>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                let mut columns = ColumnSet::new();
                for column in row {
                    assert!(
                        column < num_columns,
                        "column {column} out of range (universe has {num_columns} columns)"
                    );
                    if !columns.contains(&column) {
                        columns.push(column);
                    }
                }
                columns
            })
            .collect();

        Self { rows, num_columns }
    }

    /// The size of the column universe.
    #[must_use]
    pub const fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// The number of candidate rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The columns covered by row `row`, in the order they were declared.
    #[must_use]
    pub fn row(&self, row: usize) -> &[usize] {
        &self.rows[row]
    }

    /// Iterates over all rows as `(handle, columns)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.rows.iter().enumerate().map(|(i, r)| (i, r.as_slice()))
    }

    /// Checks that `rows` is an exact cover: every column of the universe
    /// covered by exactly one listed row. Unknown row handles fail the check.
    #[must_use]
    pub fn verify(&self, rows: &[usize]) -> bool {
        let mut covered = vec![0usize; self.num_columns];
        for &row in rows {
            let Some(columns) = self.rows.get(row) else {
                return false;
            };
            for &column in columns {
                covered[column] += 1;
            }
        }
        covered.iter().all(|&count| count == 1)
    }
}
