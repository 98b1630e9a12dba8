//! A set of cells on a board, backed by a bitset.

use std::iter::FusedIterator;

use crate::{Board, Cell};

const WORD_BITS: u16 = 64;

/// A set of cells on a particular board, represented as a bitset.
///
/// Cells are stored by their row-major linear index, so iteration always
/// yields cells in ascending row-major order. That ordering is relied on as
/// the fixed tie-break wherever a reproducible cell order matters, in
/// particular by the solver's candidate enumeration.
///
/// # Examples
///
/// ```
/// use leapline_core::{Board, Cell, CellSet};
///
/// let board = Board::new(5)?;
/// let mut set = CellSet::new(board);
///
/// set.insert(Cell::new(1, 2));
/// set.insert(Cell::new(0, 0));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Cell::new(1, 2)));
///
/// // Iteration is row-major regardless of insertion order.
/// let cells: Vec<_> = set.iter().collect();
/// assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(1, 2)]);
/// # Ok::<(), leapline_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSet {
    board: Board,
    words: Vec<u64>,
}

impl CellSet {
    /// Creates an empty set over the given board's cells.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let word_count = usize::from(board.cell_count().div_ceil(WORD_BITS));
        Self {
            board,
            words: vec![0; word_count],
        }
    }

    /// Returns the board this set ranges over.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    fn slot(&self, cell: Cell) -> Option<(usize, u64)> {
        let index = self.board.cell_index(cell)?;
        Some((usize::from(index / WORD_BITS), 1 << (index % WORD_BITS)))
    }

    /// Inserts a cell, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the set's board.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let (word, mask) = self
            .slot(cell)
            .unwrap_or_else(|| panic!("cell {cell} is outside the board"));
        let newly = self.words[word] & mask == 0;
        self.words[word] |= mask;
        newly
    }

    /// Removes a cell, returning `true` if it was present.
    pub fn remove(&mut self, cell: Cell) -> bool {
        let Some((word, mask)) = self.slot(cell) else {
            return false;
        };
        let present = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        present
    }

    /// Returns `true` if the cell is in the set.
    ///
    /// Cells outside the board are never in the set.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.slot(cell)
            .is_some_and(|(word, mask)| self.words[word] & mask != 0)
    }

    /// Returns the number of cells in the set.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn len(&self) -> u16 {
        // At most 255² = 65025 cells, so the sum fits in u16.
        self.words.iter().map(|word| word.count_ones()).sum::<u32>() as u16
    }

    /// Returns `true` if the set contains no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Removes all cells from the set.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns the raw bit words, one bit per cell in row-major order.
    ///
    /// Word 0 bit 0 is cell `(0, 0)`; bits beyond `cell_count` are always
    /// zero. Exposed so callers can build compact keys from a set without
    /// re-walking it.
    #[must_use]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Returns a borrowing iterator over the cells in ascending row-major
    /// order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: RawIter::new(self.board, &self.words),
        }
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Cell;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            board: self.board,
            words: self.words,
            cursor: Cursor::default(),
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

/// Walks set bits in ascending index order.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    word_index: usize,
    current: Option<u64>,
}

impl Cursor {
    fn next(&mut self, board: Board, words: &[u64]) -> Option<Cell> {
        loop {
            let word = match self.current {
                Some(word) => word,
                None => {
                    let word = *words.get(self.word_index)?;
                    self.current = Some(word);
                    word
                }
            };
            if word == 0 {
                self.word_index += 1;
                self.current = None;
                continue;
            }
            let bit = word.trailing_zeros();
            self.current = Some(word & (word - 1));
            let index = u16::try_from(self.word_index).ok()? * WORD_BITS + u16::try_from(bit).ok()?;
            let size = u16::from(board.size());
            #[expect(clippy::cast_possible_truncation)]
            return Some(Cell::new((index / size) as u8, (index % size) as u8));
        }
    }
}

#[derive(Debug, Clone)]
struct RawIter<'a> {
    board: Board,
    words: &'a [u64],
    cursor: Cursor,
}

impl<'a> RawIter<'a> {
    fn new(board: Board, words: &'a [u64]) -> Self {
        Self {
            board,
            words,
            cursor: Cursor::default(),
        }
    }
}

/// Borrowing iterator over a [`CellSet`], in ascending row-major order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: RawIter<'a>,
}

impl Iterator for Iter<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        self.inner.cursor.next(self.inner.board, self.inner.words)
    }
}

impl FusedIterator for Iter<'_> {}

/// Owning iterator over a [`CellSet`], in ascending row-major order.
#[derive(Debug, Clone)]
pub struct IntoIter {
    board: Board,
    words: Vec<u64>,
    cursor: Cursor,
}

impl Iterator for IntoIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        self.cursor.next(self.board, &self.words)
    }
}

impl FusedIterator for IntoIter {}
