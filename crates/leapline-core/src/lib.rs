//! Core data structures for the leapline path puzzle.
//!
//! Leapline is played on an N×N board: tokens are placed one cell at a time,
//! each new cell a fixed squared distance from the previous one (5 by default,
//! the knight's leap), and the goal is to visit every cell exactly once.
//!
//! This crate provides the board geometry and play state shared by the solver
//! and game layers:
//!
//! 1. **Geometry** - Immutable identity types
//!    - [`cell`]: A single `(row, column)` grid position
//!    - [`board`]: The N×N set of cells, bounds checks, and row-major indexing
//! 2. **Adjacency** - The move rule
//!    - [`move_rule`]: Which pairs of cells a token may leap between, and the
//!      derived set of legal next moves for a partial path
//! 3. **Play state** - The path under construction
//!    - [`path`]: An ordered, duplicate-free sequence of visited cells with
//!      O(1) membership queries and O(1) undo
//!    - [`cell_set`]: A bitset over a board's cells, iterated in row-major
//!      order
//!
//! # Examples
//!
//! ```
//! use leapline_core::{Board, Cell, MoveRule, Path};
//!
//! let board = Board::new(5)?;
//! let rule = MoveRule::knight();
//! let mut path = Path::new(board);
//!
//! // The first move is unconstrained.
//! path.push(Cell::new(0, 0), &rule).unwrap();
//!
//! // Every later move must be a knight's leap from the head.
//! assert!(path.push(Cell::new(1, 2), &rule).is_ok());
//! assert!(path.push(Cell::new(1, 3), &rule).is_err());
//!
//! // Undo is a single pop.
//! assert_eq!(path.pop(), Some(Cell::new(1, 2)));
//! # Ok::<(), leapline_core::ConfigError>(())
//! ```

pub mod board;
pub mod cell;
pub mod cell_set;
pub mod error;
pub mod move_rule;
pub mod path;

// Re-export commonly used types
pub use self::{
    board::Board,
    cell::Cell,
    cell_set::CellSet,
    error::{ConfigError, MoveError},
    move_rule::MoveRule,
    path::Path,
};
