//! Grid shape checks

use crate::core::Grid;

/// True only if `grid` is exactly `expected_rows x expected_cols`
///
/// Puzzle sources are free to return any grid text; this is how a caller
/// rejects one that ignored the requested size before scanning it.
#[must_use]
pub const fn check_size(grid: &Grid, expected_rows: usize, expected_cols: usize) -> bool {
    grid.matches_shape(expected_rows, expected_cols)
}
