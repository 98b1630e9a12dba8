//! The fixed-distance move rule.

use crate::{Board, Cell, CellSet, ConfigError, path::Path};

/// The adjacency relation between cells: two cells are connected when the
/// squared distance between them is exactly the configured constant.
///
/// The default distance of 5 is the knight's leap (1² + 2²). The relation is
/// symmetric and irreflexive, and the rule itself is stateless with respect
/// to play: it can be shared freely between a session and a search.
///
/// This type is the single source of truth for "which cells may follow the
/// head". Display layers highlight exactly [`legal_successors`]; the solver
/// enumerates exactly the same set.
///
/// [`legal_successors`]: MoveRule::legal_successors
///
/// # Examples
///
/// ```
/// use leapline_core::{Cell, MoveRule};
///
/// let rule = MoveRule::knight();
/// assert!(rule.connected(Cell::new(0, 0), Cell::new(1, 2)));
/// assert!(rule.connected(Cell::new(1, 2), Cell::new(0, 0)));
/// assert!(!rule.connected(Cell::new(0, 0), Cell::new(1, 1)));
/// assert!(!rule.connected(Cell::new(0, 0), Cell::new(0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRule {
    distance: u16,
    offsets: Vec<(i16, i16)>,
}

impl MoveRule {
    /// The default squared distance, the knight's leap.
    pub const DEFAULT_DISTANCE: u16 = 5;

    /// Creates a rule connecting cells at squared distance `distance`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnreachableDistance`] if no pair of distinct
    /// cells can ever be at that distance, i.e. `distance` has no non-zero
    /// decomposition `dr² + dc²`. A decomposable distance that happens not to
    /// fit on a small board is not a configuration error; it simply makes
    /// every first move a dead end.
    ///
    /// # Examples
    ///
    /// ```
    /// use leapline_core::{ConfigError, MoveRule};
    ///
    /// assert!(MoveRule::new(5).is_ok());
    /// assert!(MoveRule::new(2).is_ok()); // diagonal step: 1² + 1²
    /// assert_eq!(
    ///     MoveRule::new(3),
    ///     Err(ConfigError::UnreachableDistance { distance: 3 })
    /// );
    /// ```
    pub fn new(distance: u16) -> Result<Self, ConfigError> {
        let bound = i32::from(distance).isqrt();
        let mut offsets = Vec::new();
        for dr in -bound..=bound {
            for dc in -bound..=bound {
                if (dr, dc) != (0, 0) && dr * dr + dc * dc == i32::from(distance) {
                    #[expect(clippy::cast_possible_truncation)]
                    offsets.push((dr as i16, dc as i16));
                }
            }
        }
        if offsets.is_empty() {
            return Err(ConfigError::UnreachableDistance { distance });
        }
        Ok(Self { distance, offsets })
    }

    /// Creates the knight's-leap rule, squared distance 5.
    #[must_use]
    pub fn knight() -> Self {
        match Self::new(Self::DEFAULT_DISTANCE) {
            Ok(rule) => rule,
            Err(_) => unreachable!("distance 5 decomposes as 1² + 2²"),
        }
    }

    /// Returns the squared distance this rule connects.
    #[must_use]
    pub const fn distance(&self) -> u16 {
        self.distance
    }

    /// Returns the coordinate offsets realizing the distance, as
    /// `(row, column)` deltas.
    #[must_use]
    pub fn offsets(&self) -> &[(i16, i16)] {
        &self.offsets
    }

    /// Returns `true` if the two cells are at exactly the configured squared
    /// distance.
    #[must_use]
    pub fn connected(&self, a: Cell, b: Cell) -> bool {
        let dr = i32::from(a.row()) - i32::from(b.row());
        let dc = i32::from(a.col()) - i32::from(b.col());
        dr * dr + dc * dc == i32::from(self.distance)
    }

    /// Returns all on-board cells connected to `cell`, visited or not.
    #[must_use]
    pub fn neighbors(&self, cell: Cell, board: Board) -> CellSet {
        let mut set = CellSet::new(board);
        for &(dr, dc) in &self.offsets {
            let row = i32::from(cell.row()) + i32::from(dr);
            let col = i32::from(cell.col()) + i32::from(dc);
            let (Ok(row), Ok(col)) = (u8::try_from(row), u8::try_from(col)) else {
                continue;
            };
            let neighbor = Cell::new(row, col);
            if board.contains(neighbor) {
                set.insert(neighbor);
            }
        }
        set
    }

    /// Returns the legal next moves for a path: unvisited cells connected to
    /// the head, or every unvisited cell when the path is empty (the first
    /// move is unconstrained).
    ///
    /// The returned set iterates in ascending row-major order, which is the
    /// reproducible candidate order the solver relies on.
    ///
    /// # Examples
    ///
    /// ```
    /// use leapline_core::{Board, Cell, MoveRule, Path};
    ///
    /// let board = Board::new(5)?;
    /// let rule = MoveRule::knight();
    /// let mut path = Path::new(board);
    ///
    /// // Empty path: every cell is legal.
    /// assert_eq!(rule.legal_successors(&path).len(), 25);
    ///
    /// path.push(Cell::new(0, 0), &rule).unwrap();
    /// let legal: Vec<_> = rule.legal_successors(&path).into_iter().collect();
    /// assert_eq!(legal, vec![Cell::new(1, 2), Cell::new(2, 1)]);
    /// # Ok::<(), leapline_core::ConfigError>(())
    /// ```
    #[must_use]
    pub fn legal_successors(&self, path: &Path) -> CellSet {
        let board = path.board();
        match path.head() {
            Some(head) => {
                let mut set = CellSet::new(board);
                for cell in self.neighbors(head, board) {
                    if !path.is_visited(cell) {
                        set.insert(cell);
                    }
                }
                set
            }
            None => {
                let mut set = CellSet::new(board);
                set.extend(board.cells());
                set
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_offsets() {
        let rule = MoveRule::knight();
        assert_eq!(rule.distance(), 5);
        assert_eq!(rule.offsets().len(), 8);
        for &(dr, dc) in rule.offsets() {
            assert_eq!(i32::from(dr).pow(2) + i32::from(dc).pow(2), 5);
        }
    }

    #[test]
    fn test_undecomposable_distances_rejected() {
        for distance in [0, 3, 6, 7, 12] {
            assert_eq!(
                MoveRule::new(distance),
                Err(ConfigError::UnreachableDistance { distance })
            );
        }
        for distance in [1, 2, 4, 5, 8, 9, 10, 13] {
            assert!(MoveRule::new(distance).is_ok());
        }
    }

    #[test]
    fn test_connected_is_symmetric_and_irreflexive() {
        let rule = MoveRule::knight();
        let board = Board::new(5).unwrap();
        for a in board.cells() {
            assert!(!rule.connected(a, a));
            for b in board.cells() {
                assert_eq!(rule.connected(a, b), rule.connected(b, a));
            }
        }
    }

    #[test]
    fn test_neighbors_clipped_to_board() {
        let rule = MoveRule::knight();
        let board = Board::new(5).unwrap();

        let corner: Vec<_> = rule.neighbors(Cell::new(0, 0), board).into_iter().collect();
        assert_eq!(corner, vec![Cell::new(1, 2), Cell::new(2, 1)]);

        let center = rule.neighbors(Cell::new(2, 2), board);
        assert_eq!(center.len(), 8);
    }

    #[test]
    fn test_legal_successors_empty_path_is_whole_board() {
        let rule = MoveRule::knight();
        let board = Board::new(3).unwrap();
        let path = Path::new(board);
        assert_eq!(rule.legal_successors(&path).len(), 9);
    }

    #[test]
    fn test_legal_successors_excludes_visited() {
        let rule = MoveRule::knight();
        let board = Board::new(5).unwrap();
        let mut path = Path::new(board);
        path.push(Cell::new(1, 2), &rule).unwrap();
        path.push(Cell::new(0, 0), &rule).unwrap();

        // (1, 2) is a neighbor of the head (0, 0) but already visited
        let legal = rule.legal_successors(&path);
        assert!(!legal.contains(Cell::new(1, 2)));
        assert_eq!(
            legal.into_iter().collect::<Vec<_>>(),
            vec![Cell::new(2, 1)]
        );
    }

    #[test]
    fn test_too_small_board_has_no_successors_after_first_move() {
        // Distance 5 fits on no 2×2 board, but the first move is still free
        let rule = MoveRule::knight();
        let board = Board::new(2).unwrap();
        let mut path = Path::new(board);
        assert_eq!(rule.legal_successors(&path).len(), 4);

        path.push(Cell::new(0, 0), &rule).unwrap();
        assert!(rule.legal_successors(&path).is_empty());
    }
}
