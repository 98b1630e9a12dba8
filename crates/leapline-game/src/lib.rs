//! Play session orchestration for the leapline puzzle.
//!
//! A [`Session`] mediates between a display layer and the core: it turns
//! cell-click requests into path mutations, keeps the highlighted legal-move
//! set current, and drives the solver in automatic mode. The display layer
//! observes every change through [`SessionObserver`] notifications instead of
//! polling shared state.
//!
//! # Examples
//!
//! ```
//! use leapline_core::Cell;
//! use leapline_game::{PlayMode, Session, SessionConfig};
//!
//! let config = SessionConfig::default().mode(PlayMode::Manual);
//! let mut session = Session::new(&config)?;
//!
//! // Manual play: click a cell, legal successors update.
//! session.request_move(Cell::new(0, 0), &mut ())?;
//! assert!(session.legal_moves().contains(Cell::new(1, 2)));
//!
//! // Clicking the head again undoes the move.
//! session.request_move(Cell::new(0, 0), &mut ())?;
//! assert!(session.path().is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{observer::*, session::*};

mod observer;
mod session;
