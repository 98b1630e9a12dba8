//! Resumable, step-driven search.

use leapline_core::{Cell, MoveError, MoveRule, Path, cell_set};

use crate::{SearchOutcome, SolverStats, memo::FailureMemo};

/// One increment of search progress.
///
/// Every step performs at most one path mutation, so a driver that suspends
/// between steps always observes the path at a well-defined point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    /// A candidate was pushed; the path grew by one cell.
    Advanced(Cell),
    /// A dead end was retracted; the returned cell was popped.
    Backtracked(Cell),
    /// The search is over. Stepping again returns the same outcome.
    Finished(SearchOutcome),
}

/// An in-progress search over a borrowed path.
///
/// A session advances one [`SearchStep`] at a time, which makes the search
/// interruptible: the driver may stop polling at any point, and dropping an
/// unfinished (or exhausted) session pops the path back to the prefix it
/// started from. A session that finished with [`SearchOutcome::Solved`]
/// leaves the completed path in place.
///
/// Created by [`TourSolver::session`](crate::TourSolver::session).
///
/// # Examples
///
/// ```
/// use leapline_core::{Board, MoveRule, Path};
/// use leapline_solver::{SearchStep, TourSolver};
///
/// let solver = TourSolver::new(MoveRule::knight());
/// let mut path = Path::new(Board::new(5)?);
///
/// let mut session = solver.session(&mut path);
/// let outcome = loop {
///     match session.step()? {
///         SearchStep::Finished(outcome) => break outcome,
///         SearchStep::Advanced(_) | SearchStep::Backtracked(_) => {}
///     }
/// };
/// assert!(outcome.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct SearchSession<'a> {
    rule: &'a MoveRule,
    path: &'a mut Path,
    base_len: u16,
    frames: Vec<cell_set::IntoIter>,
    memo: Option<FailureMemo>,
    stats: SolverStats,
    finished: Option<SearchOutcome>,
}

impl<'a> SearchSession<'a> {
    pub(crate) fn new(rule: &'a MoveRule, path: &'a mut Path, memoize: bool) -> Self {
        let base_len = path.len();
        Self {
            rule,
            path,
            base_len,
            frames: Vec::new(),
            memo: memoize.then(FailureMemo::default),
            stats: SolverStats::default(),
            finished: None,
        }
    }

    /// Returns the path as the search currently sees it.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.path
    }

    /// Returns the statistics accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Returns the terminal outcome, or `None` while the search is running.
    #[must_use]
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.finished
    }

    /// Advances the search by at most one push or pop.
    ///
    /// Candidates at each depth are tried in ascending row-major order, so
    /// repeated runs from the same prefix take identical steps.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if a candidate push is rejected. Candidates come
    /// from [`MoveRule::legal_successors`], so this indicates a bug rather
    /// than a normal dead end; dead ends are reported as
    /// [`SearchStep::Backtracked`] and, at the prefix, as
    /// [`SearchOutcome::Unsolvable`].
    pub fn step(&mut self) -> Result<SearchStep, MoveError> {
        if let Some(outcome) = self.finished {
            return Ok(SearchStep::Finished(outcome));
        }
        if self.path.is_complete() {
            return Ok(self.finish(SearchOutcome::Solved));
        }
        if self.frames.is_empty() {
            self.frames
                .push(self.rule.legal_successors(self.path).into_iter());
        }

        loop {
            let frame = self
                .frames
                .last_mut()
                .unwrap_or_else(|| unreachable!("a running search has a frame"));
            if let Some(cell) = frame.next() {
                if let Some(memo) = &self.memo
                    && memo.would_fail(self.path.visited(), cell)
                {
                    self.stats.record_memo_hit();
                    continue;
                }
                self.path.push(cell, self.rule)?;
                self.stats.record_node();
                self.frames
                    .push(self.rule.legal_successors(self.path).into_iter());
                return Ok(SearchStep::Advanced(cell));
            }

            // All candidates at this depth failed: the current state is a
            // proven dead end.
            if let (Some(memo), Some(head)) = (&mut self.memo, self.path.head()) {
                memo.record(self.path.visited(), head);
            }
            self.frames.pop();
            if self.path.len() == self.base_len {
                return Ok(self.finish(SearchOutcome::Unsolvable));
            }
            let cell = self
                .path
                .pop()
                .unwrap_or_else(|| unreachable!("path is longer than the prefix"));
            self.stats.record_backtrack();
            return Ok(SearchStep::Backtracked(cell));
        }
    }

    fn finish(&mut self, outcome: SearchOutcome) -> SearchStep {
        self.finished = Some(outcome);
        SearchStep::Finished(outcome)
    }
}

impl Drop for SearchSession<'_> {
    /// Restores the pre-search prefix unless the search found a solution.
    fn drop(&mut self) {
        if self.finished == Some(SearchOutcome::Solved) {
            return;
        }
        while self.path.len() > self.base_len {
            let _ = self.path.pop();
        }
    }
}
