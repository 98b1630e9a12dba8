//! Exhaustive search for covering paths.
//!
//! Given a board, a move rule, and a possibly non-empty path prefix, the
//! solver tries to extend the prefix into a path visiting every cell exactly
//! once. It performs a depth-first search with backtracking, driven entirely
//! through [`Path::push`] and [`Path::pop`] on the caller's path, so the
//! search and manual play share one state contract.
//!
//! The search is deterministic: candidates are tried in ascending row-major
//! order, so two runs from the same prefix always find the same solution.
//!
//! [`Path::push`]: leapline_core::Path::push
//! [`Path::pop`]: leapline_core::Path::pop
//!
//! # Examples
//!
//! ```
//! use leapline_core::{Board, Cell, MoveRule, Path};
//! use leapline_solver::{SearchOutcome, TourSolver};
//!
//! let board = Board::new(5)?;
//! let solver = TourSolver::new(MoveRule::knight());
//!
//! let mut path = Path::new(board);
//! path.push(Cell::new(0, 0), solver.rule()).unwrap();
//!
//! let outcome = solver.solve(&mut path)?;
//! assert_eq!(outcome, SearchOutcome::Solved);
//! assert!(path.is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{search_session::*, tour_solver::*};

mod memo;
mod search_session;
mod tour_solver;
