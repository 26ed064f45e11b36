//! Grid text format
//!
//! Puzzles travel between the engine and external puzzle sources as plain text:
//!
//! ```text
//! H E L L O
//! W O R L D
//! ```
//!
//! One character per cell, cells separated by a single space, rows separated by
//! line breaks. Blank lines around the grid are ignored.

use super::error::{FormatError, PuzzleError};
use super::grid::Grid;

/// Parse grid text into a [`Grid`]
///
/// # Errors
/// Returns `PuzzleError::Format` if the text has no rows, rows of unequal
/// length, or a cell token longer than one character.
///
/// # Examples
/// ```
/// use wordsearch_engine::core::parse_grid;
///
/// let grid = parse_grid("H E L L O\nW O R L D\n").unwrap();
/// assert_eq!(grid.dimensions(), (2, 5));
/// assert_eq!(grid.get(1, 4), Some('D'));
///
/// assert!(parse_grid("A B C\nD E").is_err());
/// ```
pub fn parse_grid(text: &str) -> Result<Grid, PuzzleError> {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(row, line)| parse_row(row, line))
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(FormatError::Empty.into());
    }

    Grid::from_rows(rows)
}

fn parse_row(row: usize, line: &str) -> Result<Vec<char>, FormatError> {
    line.split_whitespace()
        .enumerate()
        .map(|(col, token)| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(ch),
                _ => Err(FormatError::MultiCharCell {
                    row,
                    col,
                    token: token.to_string(),
                }),
            }
        })
        .collect()
}

/// Render a [`Grid`] in the text format accepted by [`parse_grid`]
#[must_use]
pub fn serialize_grid(grid: &Grid) -> String {
    grid.to_string()
}
