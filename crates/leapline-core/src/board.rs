//! Board geometry.

use crate::{Cell, ConfigError};

/// An N×N board of cells.
///
/// The board is pure geometry: it owns no play state, only identity and
/// bounds. It is constructed once per session and never mutated.
///
/// # Examples
///
/// ```
/// use leapline_core::{Board, Cell};
///
/// let board = Board::new(5)?;
/// assert_eq!(board.size(), 5);
/// assert_eq!(board.cell_count(), 25);
/// assert!(board.contains(Cell::new(4, 4)));
/// assert!(!board.contains(Cell::new(5, 0)));
/// # Ok::<(), leapline_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: u8,
}

impl Board {
    /// Creates a board with `size` rows and columns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBoard`] if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use leapline_core::{Board, ConfigError};
    ///
    /// assert!(Board::new(5).is_ok());
    /// assert_eq!(Board::new(0), Err(ConfigError::EmptyBoard));
    /// ```
    pub fn new(size: u8) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        Ok(Self { size })
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the total number of cells, `size²`.
    #[must_use]
    pub const fn cell_count(&self) -> u16 {
        self.size as u16 * self.size as u16
    }

    /// Returns `true` if the cell lies on this board.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.size && cell.col() < self.size
    }

    /// Returns the row-major linear index of a cell, or `None` if the cell
    /// lies outside the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use leapline_core::{Board, Cell};
    ///
    /// let board = Board::new(5)?;
    /// assert_eq!(board.cell_index(Cell::new(0, 0)), Some(0));
    /// assert_eq!(board.cell_index(Cell::new(1, 2)), Some(7));
    /// assert_eq!(board.cell_index(Cell::new(5, 0)), None);
    /// # Ok::<(), leapline_core::ConfigError>(())
    /// ```
    #[must_use]
    pub fn cell_index(&self, cell: Cell) -> Option<u16> {
        self.contains(cell)
            .then(|| u16::from(cell.row()) * u16::from(self.size) + u16::from(cell.col()))
    }

    /// Returns an iterator over all cells in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use leapline_core::{Board, Cell};
    ///
    /// let board = Board::new(2)?;
    /// let cells: Vec<_> = board.cells().collect();
    /// assert_eq!(
    ///     cells,
    ///     vec![
    ///         Cell::new(0, 0),
    ///         Cell::new(0, 1),
    ///         Cell::new(1, 0),
    ///         Cell::new(1, 1),
    ///     ]
    /// );
    /// # Ok::<(), leapline_core::ConfigError>(())
    /// ```
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_board() {
        assert_eq!(Board::new(0), Err(ConfigError::EmptyBoard));
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(Board::new(1).unwrap().cell_count(), 1);
        assert_eq!(Board::new(5).unwrap().cell_count(), 25);
        assert_eq!(Board::new(255).unwrap().cell_count(), 65025);
    }

    #[test]
    fn test_contains_bounds() {
        let board = Board::new(3).unwrap();
        assert!(board.contains(Cell::new(0, 0)));
        assert!(board.contains(Cell::new(2, 2)));
        assert!(!board.contains(Cell::new(3, 0)));
        assert!(!board.contains(Cell::new(0, 3)));
    }

    #[test]
    fn test_cell_index_row_major() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.cell_index(Cell::new(0, 0)), Some(0));
        assert_eq!(board.cell_index(Cell::new(0, 3)), Some(3));
        assert_eq!(board.cell_index(Cell::new(1, 0)), Some(4));
        assert_eq!(board.cell_index(Cell::new(3, 3)), Some(15));
        assert_eq!(board.cell_index(Cell::new(4, 0)), None);
    }

    #[test]
    fn test_cells_covers_board_in_order() {
        let board = Board::new(5).unwrap();
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells.len(), 25);

        // Row-major order matches cell_index
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(board.cell_index(*cell), Some(u16::try_from(i).unwrap()));
        }

        // Strictly ascending, so no duplicates
        assert!(cells.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
