//! Display-layer notifications.

use std::num::NonZero;

use leapline_core::{Cell, CellSet};
use leapline_solver::SearchOutcome;

/// Receives notifications about session state changes.
///
/// All methods have empty default bodies, so an observer implements only what
/// it renders. The unit type `()` is the null observer for callers that do
/// not display anything.
///
/// Notifications are the only channel between the core and a display layer;
/// there is no shared mutable flag to poll.
pub trait SessionObserver {
    /// A cell's occupancy changed: `Some(order)` means it is now visited with
    /// that 1-based visit index, `None` means it became unvisited again.
    ///
    /// Fired after every push and pop, including each step of an automatic
    /// search.
    fn on_cell_state_changed(&mut self, cell: Cell, order: Option<NonZero<u16>>) {
        let _ = (cell, order);
    }

    /// The set of legal next moves changed; fired after every manual
    /// mutation and once when an automatic search finishes, for highlighting.
    fn on_legal_moves_changed(&mut self, legal: &CellSet) {
        let _ = legal;
    }

    /// The automatic search advanced to a cell; fired per forward step, for
    /// animation.
    fn on_search_progress(&mut self, cell: Cell) {
        let _ = cell;
    }

    /// The session reached a terminal outcome.
    fn on_terminal(&mut self, outcome: SearchOutcome) {
        let _ = outcome;
    }
}

/// The null observer: every notification is dropped.
impl SessionObserver for () {}
