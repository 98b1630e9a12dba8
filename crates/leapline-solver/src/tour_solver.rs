//! The depth-first tour solver.

use leapline_core::{MoveError, MoveRule, Path};
use rayon::prelude::*;

use crate::{SearchSession, SearchStep};

/// The terminal result of a search.
///
/// `Unsolvable` is a legitimate outcome, not an error: it means the search
/// exhausted every extension of the starting prefix. At intermediate depths
/// the same condition just triggers a backtrack; only at the prefix is it
/// definitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum SearchOutcome {
    /// A path covering every cell exactly once was found and left in place.
    #[display("solved")]
    Solved,
    /// No covering path exists from the starting prefix.
    #[display("unsolvable")]
    Unsolvable,
}

/// Statistics collected during a search.
///
/// # Examples
///
/// ```
/// use leapline_core::{Board, MoveRule, Path};
/// use leapline_solver::TourSolver;
///
/// let solver = TourSolver::new(MoveRule::knight());
/// let mut path = Path::new(Board::new(5)?);
/// let mut stats = solver.new_stats();
///
/// let _outcome = solver.solve_with_stats(&mut path, &mut stats)?;
/// println!("{} nodes, {} backtracks", stats.nodes(), stats.backtracks());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    nodes: u64,
    backtracks: u64,
    memo_hits: u64,
}

impl SolverStats {
    /// Returns the number of cells pushed during the search.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns the number of dead ends retracted.
    #[must_use]
    pub fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Returns the number of candidates skipped via failure memoization.
    ///
    /// Always zero unless the solver was built with
    /// [`TourSolver::with_failure_memo`].
    #[must_use]
    pub fn memo_hits(&self) -> u64 {
        self.memo_hits
    }

    /// Returns `true` if the search expanded at least one node.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.nodes > 0
    }

    /// Adds another run's counters onto this one.
    pub fn merge(&mut self, other: &SolverStats) {
        self.nodes += other.nodes;
        self.backtracks += other.backtracks;
        self.memo_hits += other.memo_hits;
    }

    pub(crate) fn record_node(&mut self) {
        self.nodes += 1;
    }

    pub(crate) fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    pub(crate) fn record_memo_hit(&mut self) {
        self.memo_hits += 1;
    }
}

/// Exhaustive depth-first search for a path covering every cell exactly once.
///
/// The solver owns no play state: it extends and retracts the caller's
/// [`Path`] through its push/pop contract, so the recursion stack is the
/// backtracking stack. Starting from a manual prefix works the same as
/// starting from an empty path.
///
/// # Examples
///
/// Solve from scratch:
///
/// ```
/// use leapline_core::{Board, MoveRule, Path};
/// use leapline_solver::{SearchOutcome, TourSolver};
///
/// let solver = TourSolver::new(MoveRule::knight());
/// let mut path = Path::new(Board::new(5)?);
///
/// assert_eq!(solver.solve(&mut path)?, SearchOutcome::Solved);
/// assert_eq!(path.len(), 25);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// A prefix that cannot be completed is reported, not raised:
///
/// ```
/// use leapline_core::{Board, Cell, MoveRule, Path};
/// use leapline_solver::{SearchOutcome, TourSolver};
///
/// let solver = TourSolver::new(MoveRule::knight());
/// let mut path = Path::new(Board::new(2)?);
/// path.push(Cell::new(0, 0), solver.rule()).unwrap();
///
/// assert_eq!(solver.solve(&mut path)?, SearchOutcome::Unsolvable);
/// assert_eq!(path.len(), 1); // prefix untouched
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct TourSolver {
    rule: MoveRule,
    failure_memo: bool,
}

impl TourSolver {
    /// Creates a solver searching under the given move rule.
    #[must_use]
    pub fn new(rule: MoveRule) -> Self {
        Self {
            rule,
            failure_memo: false,
        }
    }

    /// Enables failure memoization.
    ///
    /// Visited-mask/head states proven unsolvable are remembered within each
    /// search and skipped on re-entry. This prunes failing subtrees without
    /// changing which solution is found, at the cost of memory proportional
    /// to the number of distinct dead-end states.
    #[must_use]
    pub fn with_failure_memo(mut self) -> Self {
        self.failure_memo = true;
        self
    }

    /// Returns the move rule this solver searches under.
    #[must_use]
    pub fn rule(&self) -> &MoveRule {
        &self.rule
    }

    /// Creates a fresh statistics object.
    #[must_use]
    pub fn new_stats(&self) -> SolverStats {
        SolverStats::default()
    }

    /// Starts a step-driven search from the path's current prefix.
    ///
    /// The returned session borrows the path; see [`SearchSession`] for the
    /// stepping and cancellation contract.
    #[must_use]
    pub fn session<'a>(&'a self, path: &'a mut Path) -> SearchSession<'a> {
        SearchSession::new(&self.rule, path, self.failure_memo)
    }

    /// Searches for a covering path from the current prefix.
    ///
    /// On [`SearchOutcome::Solved`] the path is left completed; on
    /// [`SearchOutcome::Unsolvable`] it is restored to the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if an internal push is rejected, which indicates
    /// a bug rather than a dead end.
    pub fn solve(&self, path: &mut Path) -> Result<SearchOutcome, MoveError> {
        let mut stats = self.new_stats();
        self.solve_with_stats(path, &mut stats)
    }

    /// Like [`solve`](Self::solve), but accumulates counters into an existing
    /// statistics object, which is useful across multiple attempts.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if an internal push is rejected, which indicates
    /// a bug rather than a dead end.
    pub fn solve_with_stats(
        &self,
        path: &mut Path,
        stats: &mut SolverStats,
    ) -> Result<SearchOutcome, MoveError> {
        let mut session = self.session(path);
        let outcome = loop {
            if let SearchStep::Finished(outcome) = session.step()? {
                break outcome;
            }
        };
        stats.merge(session.stats());
        Ok(outcome)
    }

    /// Searches disjoint first-move branches in parallel.
    ///
    /// Each legal successor of the prefix seeds its own search on a clone of
    /// the path; the board and rule are shared immutably. The branch that is
    /// first in row-major order wins, so the outcome and the found path are
    /// identical to the sequential [`solve`](Self::solve).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if an internal push is rejected, which indicates
    /// a bug rather than a dead end.
    pub fn solve_parallel(&self, path: &mut Path) -> Result<SearchOutcome, MoveError> {
        if path.is_complete() {
            return Ok(SearchOutcome::Solved);
        }

        let candidates: Vec<_> = self.rule.legal_successors(path).into_iter().collect();
        let first_win = candidates
            .into_par_iter()
            .find_map_first(|cell| {
                let mut branch = path.clone();
                if let Err(err) = branch.push(cell, &self.rule) {
                    return Some(Err(err));
                }
                match self.solve(&mut branch) {
                    Ok(SearchOutcome::Solved) => Some(Ok(branch)),
                    Ok(SearchOutcome::Unsolvable) => None,
                    Err(err) => Some(Err(err)),
                }
            })
            .transpose()?;

        match first_win {
            Some(branch) => {
                // Replay the winning suffix onto the caller's path.
                for &cell in &branch.cells()[usize::from(path.len())..] {
                    path.push(cell, &self.rule)?;
                }
                Ok(SearchOutcome::Solved)
            }
            None => Ok(SearchOutcome::Unsolvable),
        }
    }
}
