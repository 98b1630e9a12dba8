//! Grid cell identity.

use std::fmt::{self, Display};

/// A single grid position, identified by its row and column.
///
/// Cells are pure identity: they carry no visit state. Whether a cell has been
/// visited, and in what order, is owned by [`Path`](crate::Path).
///
/// Ordering is row-major (row first, then column), which is the fixed
/// iteration order used everywhere a reproducible cell order matters.
///
/// # Examples
///
/// ```
/// use leapline_core::Cell;
///
/// let cell = Cell::new(2, 3);
/// assert_eq!(cell.row(), 2);
/// assert_eq!(cell.col(), 3);
///
/// // Row-major ordering
/// assert!(Cell::new(0, 4) < Cell::new(1, 0));
/// assert!(Cell::new(1, 0) < Cell::new(1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell at the given row and column.
    ///
    /// The coordinates are not bounds-checked here; whether a cell lies on a
    /// particular board is decided by [`Board::contains`](crate::Board::contains).
    ///
    /// # Examples
    ///
    /// ```
    /// use leapline_core::Cell;
    ///
    /// let cell = Cell::new(0, 0);
    /// assert_eq!(cell, Cell::new(0, 0));
    /// ```
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row coordinate.
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the column coordinate.
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Cell {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}
