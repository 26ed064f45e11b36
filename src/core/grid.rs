//! Word-search grid
//!
//! A `Grid` is a fixed `rows x cols` array of cells. Cells start empty and are
//! filled by [`Grid::try_occupy`] during placement, then by
//! [`Grid::fill_remaining`] once every word is committed. After that the grid is
//! only ever read.

use super::error::{FormatError, PuzzleError};
use rand::Rng;
use std::fmt;

/// Uppercase Latin letters, the default fill alphabet
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Text marker for a cell that has not been occupied or filled
pub const EMPTY_CELL: char = '.';

/// Rectangular grid of single-character cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Errors
    /// Returns `PuzzleError::Dimension` if `rows` or `cols` is zero.
    ///
    /// # Examples
    /// ```
    /// use wordsearch_engine::core::Grid;
    ///
    /// let grid = Grid::new(3, 4).unwrap();
    /// assert_eq!(grid.dimensions(), (3, 4));
    /// assert!(Grid::new(0, 4).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, PuzzleError> {
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::Dimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Build a grid from rows of characters
    ///
    /// Characters are uppercased and [`EMPTY_CELL`] becomes an empty cell.
    ///
    /// # Errors
    /// Returns `FormatError::Empty` for no rows, `FormatError::RaggedRows` if
    /// the rows differ in length, and `PuzzleError::Dimension` if the rows are
    /// themselves empty.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, PuzzleError> {
        let Some(first) = rows.first() else {
            return Err(FormatError::Empty.into());
        };
        let cols = first.len();

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(FormatError::RaggedRows {
                row,
                expected: cols,
                found,
            }
            .into());
        }

        let mut grid = Self::new(rows.len(), cols)?;
        for (cell, ch) in grid.cells.iter_mut().zip(rows.into_iter().flatten()) {
            *cell = (ch != EMPTY_CELL).then(|| ch.to_ascii_uppercase());
        }
        Ok(grid)
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Check the grid is exactly `rows x cols`
    #[inline]
    #[must_use]
    pub const fn matches_shape(&self, rows: usize, cols: usize) -> bool {
        self.rows == rows && self.cols == cols
    }

    #[inline]
    const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Character at `(row, col)`, `None` if empty or out of bounds
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.index(row, col).and_then(|i| self.cells[i])
    }

    /// Whether `ch` could be written to `(row, col)` without overwriting a
    /// different letter
    #[inline]
    #[must_use]
    pub fn accepts(&self, row: usize, col: usize, ch: char) -> bool {
        self.index(row, col)
            .is_some_and(|i| self.cells[i].is_none_or(|existing| existing == ch))
    }

    /// Write `ch` to `(row, col)` if the cell is empty or already holds `ch`
    ///
    /// Returns `false` and leaves the grid untouched if the cell holds a
    /// different character or is out of bounds. This is what lets two words
    /// cross on a shared letter.
    ///
    /// # Examples
    /// ```
    /// use wordsearch_engine::core::Grid;
    ///
    /// let mut grid = Grid::new(2, 2).unwrap();
    /// assert!(grid.try_occupy(0, 0, 'A'));
    /// assert!(grid.try_occupy(0, 0, 'A'));
    /// assert!(!grid.try_occupy(0, 0, 'B'));
    /// assert!(!grid.try_occupy(5, 0, 'A'));
    /// assert_eq!(grid.get(0, 0), Some('A'));
    /// ```
    pub fn try_occupy(&mut self, row: usize, col: usize, ch: char) -> bool {
        if !self.accepts(row, col, ch) {
            return false;
        }
        if let Some(i) = self.index(row, col) {
            self.cells[i] = Some(ch);
        }
        true
    }

    /// Fill every empty cell with a uniformly random character from `alphabet`
    ///
    /// # Errors
    /// Returns `PuzzleError::EmptyAlphabet` if `alphabet` is empty.
    pub fn fill_remaining<R: Rng + ?Sized>(
        &mut self,
        alphabet: &[char],
        rng: &mut R,
    ) -> Result<(), PuzzleError> {
        if alphabet.is_empty() {
            return Err(PuzzleError::EmptyAlphabet);
        }
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(alphabet[rng.random_range(0..alphabet.len())]);
        }
        Ok(())
    }

    /// Whether every cell holds a character
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over rows as slices of cells
    pub fn row_cells(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.cols)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.row_cells().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.unwrap_or(EMPTY_CELL))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(PuzzleError::Dimension { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(PuzzleError::Dimension { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(3, 7).unwrap();
        assert_eq!(grid.dimensions(), (3, 7));
        assert_eq!(grid.occupied_count(), 0);
        assert!(!grid.is_filled());
        assert_eq!(grid.row_cells().count(), 3);
        assert!(grid.row_cells().all(|row| row.len() == 7));
    }

    #[test]
    fn try_occupy_shares_matching_letters() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.try_occupy(1, 1, 'X'));
        assert!(grid.try_occupy(1, 1, 'X'));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn try_occupy_conflict_does_not_mutate() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.try_occupy(2, 0, 'M'));
        assert!(!grid.try_occupy(2, 0, 'N'));
        assert_eq!(grid.get(2, 0), Some('M'));
    }

    #[test]
    fn try_occupy_out_of_bounds() {
        let mut grid = Grid::new(2, 3).unwrap();
        assert!(!grid.try_occupy(2, 0, 'A'));
        assert!(!grid.try_occupy(0, 3, 'A'));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn fill_remaining_keeps_placed_letters() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert!(grid.try_occupy(0, 0, 'Q'));
        let alphabet: Vec<char> = "XY".chars().collect();

        let mut rng = StdRng::seed_from_u64(7);
        grid.fill_remaining(&alphabet, &mut rng).unwrap();

        assert!(grid.is_filled());
        assert_eq!(grid.get(0, 0), Some('Q'));
        for r in 0..4 {
            for c in 0..4 {
                if (r, c) != (0, 0) {
                    assert!(matches!(grid.get(r, c), Some('X' | 'Y')));
                }
            }
        }
    }

    #[test]
    fn fill_remaining_rejects_empty_alphabet() {
        let mut grid = Grid::new(2, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            grid.fill_remaining(&[], &mut rng),
            Err(PuzzleError::EmptyAlphabet)
        );
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows = vec![vec!['A', 'B'], vec!['C']];
        assert_eq!(
            Grid::from_rows(rows),
            Err(PuzzleError::Format(FormatError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }))
        );
    }

    #[test]
    fn from_rows_normalizes_case_and_empty_marker() {
        let grid = Grid::from_rows(vec![vec!['a', '.'], vec!['c', 'D']]).unwrap();
        assert_eq!(grid.get(0, 0), Some('A'));
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.get(1, 1), Some('D'));
    }

    #[test]
    fn matches_shape() {
        let grid = Grid::new(5, 6).unwrap();
        assert!(grid.matches_shape(5, 6));
        assert!(!grid.matches_shape(6, 5));
    }

    #[test]
    fn display_uses_single_spaces() {
        let mut grid = Grid::new(2, 3).unwrap();
        assert!(grid.try_occupy(0, 0, 'C'));
        assert!(grid.try_occupy(1, 2, 'T'));
        assert_eq!(grid.to_string(), "C . .\n. . T");
    }
}
