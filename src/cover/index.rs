#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The live column-to-rows index of an exact cover search.
//!
//! [`ColumnIndex`] is the mutable half of the search state: for every column
//! not yet satisfied, the set of candidate rows that still cover it. Columns
//! occupy dense slots; a slot holding `None` is a column already covered by
//! some chosen row. The index is built once per instance by transposing the
//! row table and is then mutated in place by [`ColumnIndex::select`] and
//! restored, exactly and in reverse order, by [`ColumnIndex::deselect`].
//!
//! The index upholds one invariant throughout the search: for every live
//! column `j`, its slot holds exactly the rows not yet excluded that cover
//! `j`. Selecting a row removes every conflicting row from every live column
//! and retires the row's own columns; deselecting replays the removals
//! backwards, so the state after a select/deselect pair is structurally
//! identical to the state before it.

use crate::cover::matrix::Matrix;
use rustc_hash::FxHashSet;

/// Undo record for one applied [`ColumnIndex::select`]: the selected row and
/// the row-sets of its retired columns, in the column order of the row table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    row: usize,
    removed: Vec<FxHashSet<usize>>,
}

impl Selection {
    /// The row this record belongs to.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }
}

/// The mutable column-to-rows index (the `A` of the cover/select/deselect
/// formulation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    columns: Vec<Option<FxHashSet<usize>>>,
    live: usize,
}

impl ColumnIndex {
    /// Builds the index for `matrix`: every column starts live, holding the
    /// set of rows that cover it. Columns no row covers start live and empty,
    /// which makes any search over them fail immediately rather than succeed
    /// vacuously.
    #[must_use]
    pub fn new(matrix: &Matrix) -> Self {
        let mut columns: Vec<Option<FxHashSet<usize>>> =
            vec![Some(FxHashSet::default()); matrix.num_columns()];

        for (row, covered) in matrix.iter() {
            for &column in covered {
                if let Some(rows) = columns[column].as_mut() {
                    rows.insert(row);
                }
            }
        }

        let live = columns.len();
        Self { columns, live }
    }

    /// True once every column has been covered by exactly one selected row.
    #[must_use]
    pub const fn is_covered(&self) -> bool {
        self.live == 0
    }

    /// The number of columns still awaiting a cover.
    #[must_use]
    pub const fn live_columns(&self) -> usize {
        self.live
    }

    /// The candidate rows still covering `column`, or `None` if the column is
    /// already covered.
    #[must_use]
    pub fn rows(&self, column: usize) -> Option<&FxHashSet<usize>> {
        self.columns.get(column).and_then(Option::as_ref)
    }

    /// Iterates the live columns in handle order as `(column, candidate
    /// count)` pairs. Handle order is what makes heuristic tie-breaks
    /// deterministic.
    pub fn live_iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(column, rows)| rows.as_ref().map(|r| (column, r.len())))
    }

    /// Selects `row`: retires each of its columns from the index after
    /// removing every other row that covers any of them from all remaining
    /// live columns.
    ///
    /// Returns the undo record needed by [`Self::deselect`], or `None` if any
    /// column of `row` is already covered, in which case the index is left
    /// untouched. A `None` here during forced pre-selection is how an
    /// inconsistent instance surfaces: the caller marks the search infeasible
    /// and the engine reports zero solutions.
    pub fn select(&mut self, matrix: &Matrix, row: usize) -> Option<Selection> {
        let covered = matrix.row(row);
        if covered.iter().any(|&j| self.columns[j].is_none()) {
            return None;
        }

        let mut removed = Vec::with_capacity(covered.len());
        for &j in covered {
            // Retire the column first; its row-set is what gets iterated, so
            // the set being removed from other columns is never borrowed from
            // the index itself.
            let Some(rows) = self.columns[j].take() else {
                continue;
            };
            self.live -= 1;

            for &i in &rows {
                for &k in matrix.row(i) {
                    if k == j {
                        continue;
                    }
                    if let Some(others) = self.columns[k].as_mut() {
                        others.remove(&i);
                    }
                }
            }
            removed.push(rows);
        }

        Some(Selection { row, removed })
    }

    /// Undoes a [`Self::select`], restoring the index to the exact state it
    /// had before. Columns are revived last-retired-first; this mirror order
    /// is what guarantees every re-insertion targets a live column.
    pub fn deselect(&mut self, matrix: &Matrix, selection: Selection) {
        let Selection { row, mut removed } = selection;

        for &j in matrix.row(row).iter().rev() {
            let Some(rows) = removed.pop() else {
                break;
            };
            for &i in &rows {
                for &k in matrix.row(i) {
                    if k == j {
                        continue;
                    }
                    if let Some(others) = self.columns[k].as_mut() {
                        others.insert(i);
                    }
                }
            }
            self.columns[j] = Some(rows);
            self.live += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_matrix() -> Matrix {
        // Knuth's classic 7-column instance. Rows 0, 3 and 4 form the unique
        // exact cover.
        Matrix::new(
            7,
            [
                vec![2, 4, 5],
                vec![0, 3, 6],
                vec![1, 2, 5],
                vec![0, 3],
                vec![1, 6],
                vec![3, 4, 6],
            ],
        )
    }

    #[test]
    fn test_new_transposes_rows() {
        let matrix = small_matrix();
        let index = ColumnIndex::new(&matrix);

        assert_eq!(index.live_columns(), 7);
        let rows_for_three: Vec<_> = {
            let mut v: Vec<_> = index.rows(3).unwrap().iter().copied().collect();
            v.sort_unstable();
            v
        };
        assert_eq!(rows_for_three, vec![1, 3, 5]);
    }

    #[test]
    fn test_uncoverable_column_starts_live_and_empty() {
        let matrix = Matrix::new(2, [vec![0]]);
        let index = ColumnIndex::new(&matrix);

        assert_eq!(index.live_columns(), 2);
        assert!(index.rows(1).unwrap().is_empty());
    }

    #[test]
    fn test_select_retires_columns_and_hides_conflicts() {
        let matrix = small_matrix();
        let mut index = ColumnIndex::new(&matrix);

        let selection = index.select(&matrix, 3).expect("row 3 must be selectable");
        assert_eq!(selection.row(), 3);
        // Row 3 covers columns 0 and 3.
        assert!(index.rows(0).is_none());
        assert!(index.rows(3).is_none());
        // Row 1 (covers 0) and row 5 (covers 3) must be hidden everywhere.
        assert!(!index.rows(6).unwrap().contains(&1));
        assert!(!index.rows(6).unwrap().contains(&5));
        assert!(!index.rows(4).unwrap().contains(&5));
    }

    #[test]
    fn test_select_deselect_restores_exactly() {
        let matrix = small_matrix();
        let mut index = ColumnIndex::new(&matrix);
        let before = index.clone();

        let selection = index.select(&matrix, 0).expect("row 0 must be selectable");
        assert_ne!(index, before);

        index.deselect(&matrix, selection);
        assert_eq!(index, before);
    }

    #[test]
    fn test_nested_select_deselect_restores_exactly() {
        let matrix = small_matrix();
        let mut index = ColumnIndex::new(&matrix);
        let initial = index.clone();

        let outer = index.select(&matrix, 3).unwrap();
        let mid = index.clone();
        let inner = index.select(&matrix, 0).unwrap();

        index.deselect(&matrix, inner);
        assert_eq!(index, mid);
        index.deselect(&matrix, outer);
        assert_eq!(index, initial);
    }

    #[test]
    fn test_select_conflicting_row_refused_without_mutation() {
        let matrix = small_matrix();
        let mut index = ColumnIndex::new(&matrix);

        let _kept = index.select(&matrix, 1).unwrap();
        let snapshot = index.clone();

        // Row 3 shares columns 0 and 3 with row 1, both now covered.
        assert!(index.select(&matrix, 3).is_none());
        assert_eq!(index, snapshot);
    }

    #[test]
    fn test_full_cover_empties_index() {
        let matrix = small_matrix();
        let mut index = ColumnIndex::new(&matrix);

        for row in [0, 3, 4] {
            index.select(&matrix, row).unwrap();
        }
        assert!(index.is_covered());
    }
}
