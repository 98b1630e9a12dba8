//! Error types for configuration and move validation.

use crate::Cell;

/// Errors detected when constructing a board or move rule.
///
/// Configuration errors are fatal: they are reported before a session starts
/// and never occur during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The requested board has no cells.
    #[display("board size must be at least 1")]
    EmptyBoard,
    /// The squared distance has no non-zero decomposition into row and column
    /// offsets, so the rule could never connect any two cells on any board.
    #[display("distance {distance} cannot connect any two cells")]
    UnreachableDistance {
        /// The rejected squared distance.
        distance: u16,
    },
}

/// Reasons a requested move is rejected.
///
/// Rejected moves are expected and frequent during manual play. They never
/// mutate any state; the caller simply receives the reason and the path is
/// left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The target cell lies outside the board.
    #[display("cell {cell} is outside the board")]
    OutOfBounds {
        /// The rejected cell.
        cell: Cell,
    },
    /// The target cell is already part of the path.
    #[display("cell {cell} is already visited")]
    AlreadyVisited {
        /// The rejected cell.
        cell: Cell,
    },
    /// The target cell is not connected to the path head by the move rule.
    #[display("cell {cell} is not a legal move from {head}")]
    NotAdjacent {
        /// The rejected cell.
        cell: Cell,
        /// The current path head.
        head: Cell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConfigError::EmptyBoard.to_string(),
            "board size must be at least 1"
        );
        assert_eq!(
            ConfigError::UnreachableDistance { distance: 3 }.to_string(),
            "distance 3 cannot connect any two cells"
        );
        assert_eq!(
            MoveError::OutOfBounds {
                cell: Cell::new(9, 9)
            }
            .to_string(),
            "cell (9, 9) is outside the board"
        );
        assert_eq!(
            MoveError::NotAdjacent {
                cell: Cell::new(0, 1),
                head: Cell::new(0, 0)
            }
            .to_string(),
            "cell (0, 1) is not a legal move from (0, 0)"
        );
    }
}
