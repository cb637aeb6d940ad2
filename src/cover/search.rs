#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The backtracking search over an exact cover instance.
//!
//! [`Search`] enumerates every exact cover of a [`Matrix`] lazily: each call
//! to [`Iterator::next`] resumes the depth-first traversal from its innermost
//! pending backtrack point and runs until the next cover is found or the tree
//! is exhausted. A caller that only wants the first few covers simply stops
//! iterating; dropping the search frees all undo state with it.
//!
//! The recursion is expressed as an explicit frame stack rather than native
//! call-stack recursion. Each frame is one search node: the candidate rows of
//! the column chosen there (snapshotted at node entry, since selecting a
//! candidate mutates the live sets), a cursor into them, and the undo record
//! of the candidate currently applied. Descending pushes a frame, exhausting
//! a frame's candidates pops it, and the undo records guarantee the index is
//! restored in exact reverse order of mutation at every step.

use crate::cover::column_selection::{ColumnSelection, FewestCandidates};
use crate::cover::index::{ColumnIndex, Selection};
use crate::cover::matrix::Matrix;

/// One exact cover: the chosen row handles in selection order. Rows forced by
/// [`Search::preselect`] are not replayed into emitted solutions.
pub type Solution = Vec<usize>;

/// Counters describing the work a search has performed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Rows tried during the search (forced pre-selections not included).
    pub decisions: usize,
    /// Rows undone while backtracking.
    pub backtracks: usize,
    /// Covers emitted so far.
    pub solutions: usize,
}

/// One node of the explicit search stack.
#[derive(Debug)]
struct Frame {
    /// Snapshot of the chosen column's candidates at node entry, sorted by
    /// handle so enumeration order is reproducible.
    candidates: Vec<usize>,
    /// Cursor into `candidates`: the next row to try.
    next: usize,
    /// Undo record for the candidate currently applied, if any.
    undo: Option<Selection>,
}

/// A lazy, exhaustive exact cover search over an owned [`Matrix`].
///
/// The search owns its instance: the row table is immutable for its lifetime
/// and the column index is consumed in place, so enumeration is restartable
/// only by building a fresh search.
#[derive(Debug)]
pub struct Search<C: ColumnSelection = FewestCandidates> {
    matrix: Matrix,
    index: ColumnIndex,
    selector: C,
    frames: Vec<Frame>,
    path: Vec<usize>,
    started: bool,
    infeasible: bool,
    stats: SearchStats,
}

impl Search<FewestCandidates> {
    /// Creates a search using the fewest-candidates-first heuristic.
    #[must_use]
    pub fn new(matrix: Matrix) -> Self {
        Self::with_selector(matrix, FewestCandidates)
    }
}

impl<C: ColumnSelection> Search<C> {
    /// Creates a search branching with `selector`.
    #[must_use]
    pub fn with_selector(matrix: Matrix, selector: C) -> Self {
        let index = ColumnIndex::new(&matrix);
        Self {
            matrix,
            index,
            selector,
            frames: Vec::new(),
            path: Vec::new(),
            started: false,
            infeasible: false,
            stats: SearchStats::default(),
        }
    }

    /// Forces `row` into every cover this search will produce, covering its
    /// columns up front. Pre-selected rows do not appear in emitted solutions.
    ///
    /// Returns `false` and marks the search infeasible if any column of `row`
    /// is already covered (an inconsistent set of forced choices); an
    /// infeasible search yields no solutions.
    ///
    /// Must be called before iteration starts; forced choices are never
    /// backtracked.
    pub fn preselect(&mut self, row: usize) -> bool {
        debug_assert!(!self.started, "preselect after iteration started");
        if self.infeasible {
            return false;
        }
        if self.index.select(&self.matrix, row).is_none() {
            self.infeasible = true;
            return false;
        }
        true
    }

    /// The instance this search runs over.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// True if forced pre-selections already conflicted; such a search yields
    /// zero solutions.
    #[must_use]
    pub const fn is_infeasible(&self) -> bool {
        self.infeasible
    }

    /// Work counters for the search so far.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Opens a new search node: picks a column and snapshots its candidates.
    /// When no live column remains nothing is pushed; when the chosen column
    /// has no candidates the pushed frame is exhausted immediately, which is
    /// how a dead branch terminates.
    fn push_frame(&mut self) {
        let Some(column) = self.selector.choose(&self.index) else {
            return;
        };
        let Some(rows) = self.index.rows(column) else {
            return;
        };
        let mut candidates: Vec<usize> = rows.iter().copied().collect();
        candidates.sort_unstable();
        self.frames.push(Frame {
            candidates,
            next: 0,
            undo: None,
        });
    }
}

impl<C: ColumnSelection> Iterator for Search<C> {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        if self.infeasible {
            return None;
        }
        if !self.started {
            self.started = true;
            if self.index.is_covered() {
                // Nothing left to cover: the forced choices alone are a
                // complete cover (or the universe was empty to begin with).
                return Some(self.path.clone());
            }
            self.push_frame();
        }

        loop {
            let frame = self.frames.last_mut()?;
            let undo = frame.undo.take();
            let row = if frame.next < frame.candidates.len() {
                let row = frame.candidates[frame.next];
                frame.next += 1;
                Some(row)
            } else {
                None
            };

            if let Some(selection) = undo {
                self.index.deselect(&self.matrix, selection);
                self.path.pop();
                self.stats.backtracks += 1;
            }

            let Some(row) = row else {
                self.frames.pop();
                continue;
            };

            // The index was just restored to this node's entry state, so
            // every snapshotted candidate still has all its columns live.
            let Some(selection) = self.index.select(&self.matrix, row) else {
                continue;
            };
            self.path.push(row);
            self.stats.decisions += 1;
            if let Some(frame) = self.frames.last_mut() {
                frame.undo = Some(selection);
            }

            if self.index.is_covered() {
                self.stats.solutions += 1;
                return Some(self.path.clone());
            }
            self.push_frame();
        }
    }
}
