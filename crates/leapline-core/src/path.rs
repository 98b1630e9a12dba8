//! The path of visited cells.

use std::num::NonZero;

use crate::{Board, Cell, CellSet, MoveError, move_rule::MoveRule};

/// The ordered, duplicate-free sequence of cells visited so far.
///
/// A path owns three views of the same state, kept in lockstep: the visit
/// sequence itself, a per-cell 1-based order map, and a visited bitset for
/// O(1) membership queries. The order map is first-class state; it is never
/// re-derived from anything else.
///
/// [`push`](Self::push) and [`pop`](Self::pop) are the only mutations (plus
/// [`clear`](Self::clear), which is just "pop to empty"). The solver drives
/// its backtracking through the same two operations that manual play uses,
/// so its recursion stack is the undo stack.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use leapline_core::{Board, Cell, MoveRule, Path};
///
/// let board = Board::new(5)?;
/// let rule = MoveRule::knight();
/// let mut path = Path::new(board);
///
/// let order = path.push(Cell::new(0, 0), &rule).unwrap();
/// assert_eq!(order.get(), 1);
/// assert_eq!(path.head(), Some(Cell::new(0, 0)));
///
/// path.push(Cell::new(2, 1), &rule).unwrap();
/// assert_eq!(path.order_of(Cell::new(2, 1)).map(NonZero::get), Some(2));
///
/// assert_eq!(path.pop(), Some(Cell::new(2, 1)));
/// assert!(path.order_of(Cell::new(2, 1)).is_none());
/// # Ok::<(), leapline_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    board: Board,
    cells: Vec<Cell>,
    order: Vec<Option<NonZero<u16>>>,
    visited: CellSet,
}

impl Path {
    /// Creates an empty path on the given board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            cells: Vec::new(),
            order: vec![None; usize::from(board.cell_count())],
            visited: CellSet::new(board),
        }
    }

    /// Returns the board this path is played on.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the number of cells visited so far.
    ///
    /// # Panics
    ///
    /// Never panics; the length is bounded by the board's cell count.
    #[must_use]
    pub fn len(&self) -> u16 {
        u16::try_from(self.cells.len()).expect("path length is at most the cell count")
    }

    /// Returns `true` if no cell has been visited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if every cell on the board has been visited.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == self.board.cell_count()
    }

    /// Returns the most recently visited cell, or `None` for an empty path.
    #[must_use]
    pub fn head(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Returns the visit sequence, oldest first.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the set of visited cells.
    #[must_use]
    pub fn visited(&self) -> &CellSet {
        &self.visited
    }

    /// Returns `true` if the cell has been visited.
    #[must_use]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.contains(cell)
    }

    /// Returns the 1-based visit order of a cell, or `None` if unvisited.
    #[must_use]
    pub fn order_of(&self, cell: Cell) -> Option<NonZero<u16>> {
        let index = self.board.cell_index(cell)?;
        self.order[usize::from(index)]
    }

    /// Appends a cell to the path, returning its 1-based visit order.
    ///
    /// The first move is unconstrained; every later move must be connected to
    /// the current head by `rule`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`], [`MoveError::AlreadyVisited`], or
    /// [`MoveError::NotAdjacent`]. A rejected push leaves the path unchanged.
    ///
    /// # Panics
    ///
    /// Never panics; visit orders start at 1, so the stored order is always
    /// non-zero.
    pub fn push(&mut self, cell: Cell, rule: &MoveRule) -> Result<NonZero<u16>, MoveError> {
        let Some(index) = self.board.cell_index(cell) else {
            return Err(MoveError::OutOfBounds { cell });
        };
        if self.visited.contains(cell) {
            return Err(MoveError::AlreadyVisited { cell });
        }
        if let Some(head) = self.head()
            && !rule.connected(head, cell)
        {
            return Err(MoveError::NotAdjacent { cell, head });
        }

        self.cells.push(cell);
        let order = NonZero::new(self.len()).expect("a pushed path is non-empty");
        self.order[usize::from(index)] = Some(order);
        self.visited.insert(cell);
        Ok(order)
    }

    /// Removes and returns the most recently visited cell.
    ///
    /// Returns `None` on an empty path; an empty undo is a no-op, not an
    /// error. This is the sole undo primitive.
    pub fn pop(&mut self) -> Option<Cell> {
        let cell = self.cells.pop()?;
        let index = self
            .board
            .cell_index(cell)
            .unwrap_or_else(|| unreachable!("visited cells are on the board"));
        self.order[usize::from(index)] = None;
        self.visited.remove(cell);
        Some(cell)
    }

    /// Resets the path to empty, clearing the order map and visited set.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.order.fill(None);
        self.visited.clear();
    }
}
