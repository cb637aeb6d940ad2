#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Column choice heuristics for the search.
//!
//! At every search node the engine asks a [`ColumnSelection`] which live
//! column to branch on next. The choice never affects which covers exist,
//! only how quickly the search finds them, so implementations are free to
//! order columns however they like as long as the choice is deterministic
//! for a given index state.

use crate::cover::index::ColumnIndex;

/// Strategy for picking the column to branch on at a search node.
pub trait ColumnSelection {
    /// Picks a live column from `index`, or `None` when every column is
    /// covered.
    fn choose(&self, index: &ColumnIndex) -> Option<usize>;
}

/// Branch on the live column with the fewest remaining candidate rows, the
/// standard Algorithm X heuristic. Ties go to the lowest column handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FewestCandidates;

impl ColumnSelection for FewestCandidates {
    fn choose(&self, index: &ColumnIndex) -> Option<usize> {
        let mut best = None;
        let mut best_count = usize::MAX;

        for (column, count) in index.live_iter() {
            if count < best_count {
                best = Some(column);
                best_count = count;
            }
        }
        best
    }
}

/// Branch on the lowest-handle live column regardless of candidate counts.
/// Much slower on constrained instances; kept as a baseline for comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclarationOrder;

impl ColumnSelection for DeclarationOrder {
    fn choose(&self, index: &ColumnIndex) -> Option<usize> {
        index.live_iter().next().map(|(column, _)| column)
    }
}
