//! The play session controller.

use std::num::NonZero;

use leapline_core::{Board, Cell, CellSet, ConfigError, MoveError, MoveRule, Path};
use leapline_solver::{SearchOutcome, SearchStep, TourSolver};

use crate::SessionObserver;

/// How moves are made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlayMode {
    /// The player picks each move from the highlighted legal set.
    Manual,
    /// A click seeds the exhaustive search, which plays out the rest.
    #[default]
    Automatic,
}

/// Configuration for a [`Session`].
///
/// # Examples
///
/// ```
/// use leapline_game::{PlayMode, SessionConfig};
///
/// let config = SessionConfig::default()
///     .board_size(6)
///     .distance(5)
///     .mode(PlayMode::Manual);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    board_size: u8,
    distance: u16,
    play_mode: PlayMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: 5,
            distance: MoveRule::DEFAULT_DISTANCE,
            play_mode: PlayMode::default(),
        }
    }
}

impl SessionConfig {
    /// Sets the board size (rows and columns).
    #[must_use]
    pub fn board_size(mut self, size: u8) -> Self {
        self.board_size = size;
        self
    }

    /// Sets the squared move distance.
    #[must_use]
    pub fn distance(mut self, distance: u16) -> Self {
        self.distance = distance;
        self
    }

    /// Sets the play mode.
    #[must_use]
    pub fn mode(mut self, mode: PlayMode) -> Self {
        self.play_mode = mode;
        self
    }
}

/// What a successful move request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The cell was appended to the path with the given 1-based visit order.
    Moved {
        /// The new cell's visit order.
        order: NonZero<u16>,
    },
    /// The head cell was clicked, undoing the most recent move.
    Undone,
    /// Automatic mode: the clicked cell seeded a search that ran to its
    /// terminal outcome.
    Searched(SearchOutcome),
}

/// A play session: one board, one path, one mode.
///
/// The session validates display-layer move requests against the move rule,
/// applies them to the path, and notifies the observer of every resulting
/// state change. In automatic mode it hands control to the solver, which
/// drives the same path through the same push/pop contract; a search step is
/// never funneled through a simulated input event.
///
/// # Examples
///
/// Automatic play from a clicked cell:
///
/// ```
/// use leapline_core::Cell;
/// use leapline_game::{MoveOutcome, Session, SessionConfig};
/// use leapline_solver::SearchOutcome;
///
/// let mut session = Session::new(&SessionConfig::default())?;
/// let outcome = session.request_move(Cell::new(0, 0), &mut ())?;
///
/// assert_eq!(outcome, MoveOutcome::Searched(SearchOutcome::Solved));
/// assert!(session.path().is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Session {
    solver: TourSolver,
    path: Path,
    play_mode: PlayMode,
    outcome: Option<SearchOutcome>,
}

impl Session {
    /// Creates a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the board is empty or the distance can
    /// never connect two cells. Configuration errors are fatal before any
    /// play happens.
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        let board = Board::new(config.board_size)?;
        let rule = MoveRule::new(config.distance)?;
        Ok(Self {
            solver: TourSolver::new(rule),
            path: Path::new(board),
            play_mode: config.play_mode,
            outcome: None,
        })
    }

    /// Returns the board being played.
    #[must_use]
    pub fn board(&self) -> Board {
        self.path.board()
    }

    /// Returns the current path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the play mode.
    #[must_use]
    pub fn mode(&self) -> PlayMode {
        self.play_mode
    }

    /// Returns the terminal outcome, or `None` while the session is live.
    ///
    /// Cleared again by any undo, since the path is then no longer terminal.
    #[must_use]
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// Returns the current set of legal next moves, for highlighting.
    ///
    /// An empty set on an incomplete path is a manual dead end; the player
    /// can recover by undoing.
    #[must_use]
    pub fn legal_moves(&self) -> CellSet {
        self.solver.rule().legal_successors(&self.path)
    }

    /// Handles a cell click.
    ///
    /// Clicking the head cell undoes the most recent move (checked before
    /// legality, mirroring the click-to-undo affordance). Otherwise the cell
    /// is validated and pushed; in automatic mode the pushed cell then seeds
    /// a search that runs to its terminal outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the cell is out of bounds, already visited,
    /// or not adjacent to the head. A rejected request changes nothing and
    /// fires no notifications.
    pub fn request_move<O>(
        &mut self,
        cell: Cell,
        observer: &mut O,
    ) -> Result<MoveOutcome, MoveError>
    where
        O: SessionObserver + ?Sized,
    {
        if self.path.head() == Some(cell) {
            let undone = self.undo(observer);
            debug_assert_eq!(undone, Some(cell));
            return Ok(MoveOutcome::Undone);
        }

        let order = self.path.push(cell, self.solver.rule())?;
        observer.on_cell_state_changed(cell, Some(order));

        match self.play_mode {
            PlayMode::Manual => {
                if self.path.is_complete() {
                    self.finish(SearchOutcome::Solved, observer);
                } else {
                    observer.on_legal_moves_changed(&self.legal_moves());
                }
                Ok(MoveOutcome::Moved { order })
            }
            PlayMode::Automatic => {
                let outcome = self.run_search(observer)?;
                Ok(MoveOutcome::Searched(outcome))
            }
        }
    }

    /// Undoes the most recent move, returning the removed cell.
    ///
    /// A previously reached terminal outcome is cleared. Undoing an empty
    /// path is a no-op, not an error.
    pub fn undo<O>(&mut self, observer: &mut O) -> Option<Cell>
    where
        O: SessionObserver + ?Sized,
    {
        let cell = self.path.pop()?;
        self.outcome = None;
        observer.on_cell_state_changed(cell, None);
        observer.on_legal_moves_changed(&self.legal_moves());
        Some(cell)
    }

    /// Undoes every move, re-entering the initial state.
    pub fn reset<O>(&mut self, observer: &mut O)
    where
        O: SessionObserver + ?Sized,
    {
        while let Some(cell) = self.path.pop() {
            observer.on_cell_state_changed(cell, None);
        }
        self.outcome = None;
        observer.on_legal_moves_changed(&self.legal_moves());
    }

    /// Runs the exhaustive search from the current prefix, empty or not.
    ///
    /// Progress is reported step by step so the display layer can animate.
    /// On exhaustion the prefix is restored and the terminal outcome is
    /// [`SearchOutcome::Unsolvable`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if an internal push is rejected, which indicates
    /// a bug rather than a dead end.
    pub fn start_automatic<O>(&mut self, observer: &mut O) -> Result<SearchOutcome, MoveError>
    where
        O: SessionObserver + ?Sized,
    {
        self.run_search(observer)
    }

    fn run_search<O>(&mut self, observer: &mut O) -> Result<SearchOutcome, MoveError>
    where
        O: SessionObserver + ?Sized,
    {
        let mut search = self.solver.session(&mut self.path);
        let outcome = loop {
            match search.step()? {
                SearchStep::Advanced(cell) => {
                    observer.on_cell_state_changed(cell, search.path().order_of(cell));
                    observer.on_search_progress(cell);
                }
                SearchStep::Backtracked(cell) => {
                    observer.on_cell_state_changed(cell, None);
                }
                SearchStep::Finished(outcome) => break outcome,
            }
        };
        drop(search);
        self.finish(outcome, observer);
        Ok(outcome)
    }

    fn finish<O>(&mut self, outcome: SearchOutcome, observer: &mut O)
    where
        O: SessionObserver + ?Sized,
    {
        self.outcome = Some(outcome);
        observer.on_legal_moves_changed(&self.legal_moves());
        observer.on_terminal(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every notification for assertions.
    #[derive(Debug, Default)]
    struct Recorder {
        cell_changes: Vec<(Cell, Option<NonZero<u16>>)>,
        legal_updates: Vec<Vec<Cell>>,
        progress: Vec<Cell>,
        terminals: Vec<SearchOutcome>,
    }

    impl SessionObserver for Recorder {
        fn on_cell_state_changed(&mut self, cell: Cell, order: Option<NonZero<u16>>) {
            self.cell_changes.push((cell, order));
        }

        fn on_legal_moves_changed(&mut self, legal: &CellSet) {
            self.legal_updates.push(legal.iter().collect());
        }

        fn on_search_progress(&mut self, cell: Cell) {
            self.progress.push(cell);
        }

        fn on_terminal(&mut self, outcome: SearchOutcome) {
            self.terminals.push(outcome);
        }
    }

    fn manual_session(size: u8) -> Session {
        Session::new(&SessionConfig::default().board_size(size).mode(PlayMode::Manual)).unwrap()
    }

    #[test]
    fn test_config_errors_are_fatal_at_construction() {
        assert_eq!(
            Session::new(&SessionConfig::default().board_size(0)).unwrap_err(),
            ConfigError::EmptyBoard
        );
        assert_eq!(
            Session::new(&SessionConfig::default().distance(3)).unwrap_err(),
            ConfigError::UnreachableDistance { distance: 3 }
        );
    }

    #[test]
    fn test_manual_move_fires_notifications() {
        let mut session = manual_session(5);
        let mut recorder = Recorder::default();

        let outcome = session
            .request_move(Cell::new(0, 0), &mut recorder)
            .unwrap();
        assert!(matches!(outcome, MoveOutcome::Moved { order } if order.get() == 1));

        assert_eq!(recorder.cell_changes.len(), 1);
        assert_eq!(recorder.cell_changes[0].0, Cell::new(0, 0));
        assert_eq!(
            recorder.legal_updates.last().unwrap(),
            &vec![Cell::new(1, 2), Cell::new(2, 1)]
        );
        assert!(recorder.terminals.is_empty());
    }

    #[test]
    fn test_manual_rejection_changes_nothing() {
        let mut session = manual_session(5);
        session.request_move(Cell::new(0, 0), &mut ()).unwrap();

        let mut recorder = Recorder::default();
        let result = session.request_move(Cell::new(0, 1), &mut recorder);
        assert_eq!(
            result,
            Err(MoveError::NotAdjacent {
                cell: Cell::new(0, 1),
                head: Cell::new(0, 0)
            })
        );

        // No state change, no notifications
        assert_eq!(session.path().cells(), &[Cell::new(0, 0)]);
        assert!(recorder.cell_changes.is_empty());
        assert!(recorder.legal_updates.is_empty());
    }

    #[test]
    fn test_clicking_head_undoes() {
        let mut session = manual_session(5);
        session.request_move(Cell::new(0, 0), &mut ()).unwrap();
        session.request_move(Cell::new(1, 2), &mut ()).unwrap();

        let mut recorder = Recorder::default();
        let outcome = session
            .request_move(Cell::new(1, 2), &mut recorder)
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Undone);
        assert_eq!(session.path().cells(), &[Cell::new(0, 0)]);
        assert_eq!(recorder.cell_changes, vec![(Cell::new(1, 2), None)]);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut session = manual_session(5);
        let mut recorder = Recorder::default();
        assert_eq!(session.undo(&mut recorder), None);
        assert!(recorder.cell_changes.is_empty());
    }

    #[test]
    fn test_three_moves_three_undos_restores_initial_state() {
        let mut session = manual_session(5);
        session.request_move(Cell::new(0, 0), &mut ()).unwrap();
        session.request_move(Cell::new(1, 2), &mut ()).unwrap();
        session.request_move(Cell::new(2, 4), &mut ()).unwrap();

        assert_eq!(session.undo(&mut ()), Some(Cell::new(2, 4)));
        assert_eq!(session.undo(&mut ()), Some(Cell::new(1, 2)));
        assert_eq!(session.undo(&mut ()), Some(Cell::new(0, 0)));

        assert!(session.path().is_empty());
        assert_eq!(session.path(), &Path::new(session.board()));
        assert_eq!(session.legal_moves().len(), 25);
    }

    #[test]
    fn test_reset_undoes_to_empty() {
        let mut session = manual_session(5);
        session.request_move(Cell::new(0, 0), &mut ()).unwrap();
        session.request_move(Cell::new(2, 1), &mut ()).unwrap();

        let mut recorder = Recorder::default();
        session.reset(&mut recorder);

        assert!(session.path().is_empty());
        assert_eq!(session.outcome(), None);
        // Undone newest-first
        assert_eq!(
            recorder.cell_changes,
            vec![(Cell::new(2, 1), None), (Cell::new(0, 0), None)]
        );
    }

    #[test]
    fn test_manual_completion_is_terminal() {
        let mut session = manual_session(1);
        let mut recorder = Recorder::default();

        session.request_move(Cell::new(0, 0), &mut recorder).unwrap();
        assert_eq!(session.outcome(), Some(SearchOutcome::Solved));
        assert_eq!(recorder.terminals, vec![SearchOutcome::Solved]);

        // Undo clears the terminal outcome
        session.undo(&mut recorder);
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_manual_dead_end_reports_empty_legal_set() {
        // 2×2 board under the knight rule: the first move strands the path
        let mut session = manual_session(2);
        let mut recorder = Recorder::default();

        session.request_move(Cell::new(0, 0), &mut recorder).unwrap();
        assert_eq!(recorder.legal_updates.last().unwrap(), &Vec::new());
        // A dead end is not terminal; the player may undo
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_automatic_click_searches_to_terminal() {
        let mut session = Session::new(&SessionConfig::default()).unwrap();
        assert!(session.mode().is_automatic());

        let mut recorder = Recorder::default();
        let outcome = session
            .request_move(Cell::new(0, 0), &mut recorder)
            .unwrap();

        assert_eq!(outcome, MoveOutcome::Searched(SearchOutcome::Solved));
        assert!(session.path().is_complete());
        assert_eq!(session.path().cells()[0], Cell::new(0, 0));
        assert_eq!(session.outcome(), Some(SearchOutcome::Solved));
        assert_eq!(recorder.terminals, vec![SearchOutcome::Solved]);

        // Every forward search step was announced for animation: 24 cells
        // beyond the clicked seed, plus one re-visit per backtrack
        let backtracks = recorder
            .cell_changes
            .iter()
            .filter(|(_, order)| order.is_none())
            .count();
        assert_eq!(recorder.progress.len(), 24 + backtracks);
    }

    #[test]
    fn test_automatic_runs_are_reproducible() {
        let config = SessionConfig::default();

        let mut first = Session::new(&config).unwrap();
        first.request_move(Cell::new(0, 0), &mut ()).unwrap();

        let mut second = Session::new(&config).unwrap();
        second.request_move(Cell::new(0, 0), &mut ()).unwrap();

        assert_eq!(first.path().cells(), second.path().cells());
    }

    #[test]
    fn test_start_automatic_from_manual_prefix() {
        let mut session = manual_session(5);
        session.request_move(Cell::new(0, 0), &mut ()).unwrap();
        session.request_move(Cell::new(1, 2), &mut ()).unwrap();

        let outcome = session.start_automatic(&mut ()).unwrap();
        match outcome {
            SearchOutcome::Solved => {
                assert!(session.path().is_complete());
                assert_eq!(
                    &session.path().cells()[..2],
                    &[Cell::new(0, 0), Cell::new(1, 2)]
                );
            }
            SearchOutcome::Unsolvable => {
                assert_eq!(
                    session.path().cells(),
                    &[Cell::new(0, 0), Cell::new(1, 2)]
                );
            }
        }
        assert_eq!(session.outcome(), Some(outcome));
    }

    #[test]
    fn test_unsolvable_board_reports_terminal_unsolvable() {
        let mut session = Session::new(&SessionConfig::default().board_size(3)).unwrap();
        let mut recorder = Recorder::default();

        let outcome = session.start_automatic(&mut recorder).unwrap();
        assert_eq!(outcome, SearchOutcome::Unsolvable);
        assert!(session.path().is_empty());
        assert_eq!(recorder.terminals, vec![SearchOutcome::Unsolvable]);
    }

    #[test]
    fn test_two_by_two_automatic_click_is_unsolvable() {
        let mut session = Session::new(&SessionConfig::default().board_size(2)).unwrap();

        // First move is unconstrained even though no second move exists
        let outcome = session.request_move(Cell::new(1, 1), &mut ()).unwrap();
        assert_eq!(outcome, MoveOutcome::Searched(SearchOutcome::Unsolvable));
        // The clicked prefix survives the failed search
        assert_eq!(session.path().cells(), &[Cell::new(1, 1)]);
    }
}
