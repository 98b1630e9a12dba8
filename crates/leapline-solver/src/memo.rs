//! Failure memoization for the search.

use std::collections::HashSet;

use leapline_core::{Cell, CellSet};
use tinyvec::TinyVec;

/// Remembers search states proven unsolvable.
///
/// A state is identified by the visited bitmask plus the head cell; the rest
/// of the path's history does not affect which extensions exist. Memoized
/// states are skipped without pushing, which prunes failing subtrees but can
/// never change which solution the fixed candidate order finds first.
#[derive(Debug, Default)]
pub(crate) struct FailureMemo {
    states: HashSet<MemoKey>,
}

/// Visited bitmask words plus the head cell's linear index.
///
/// Inline capacity covers boards up to 16×16 without allocating.
#[derive(Debug, PartialEq, Eq, Hash)]
struct MemoKey {
    words: TinyVec<[u64; 4]>,
    head: u16,
}

impl MemoKey {
    fn new(visited: &CellSet, extra: Option<Cell>, head: Cell) -> Option<Self> {
        let board = visited.board();
        let mut words: TinyVec<[u64; 4]> = visited.words().iter().copied().collect();
        if let Some(cell) = extra {
            let index = board.cell_index(cell)?;
            words[usize::from(index / 64)] |= 1 << (index % 64);
        }
        Some(Self {
            words,
            head: board.cell_index(head)?,
        })
    }
}

impl FailureMemo {
    /// Records the state `(visited, head)` as unsolvable.
    pub(crate) fn record(&mut self, visited: &CellSet, head: Cell) {
        if let Some(key) = MemoKey::new(visited, None, head) {
            self.states.insert(key);
        }
    }

    /// Returns `true` if pushing `candidate` onto the current state would
    /// enter a state already proven unsolvable.
    pub(crate) fn would_fail(&self, visited: &CellSet, candidate: Cell) -> bool {
        MemoKey::new(visited, Some(candidate), candidate)
            .is_some_and(|key| self.states.contains(&key))
    }
}
