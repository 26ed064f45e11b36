//! Core domain types for word searches
//!
//! The grid, its text format, words, directions and placements. Nothing here
//! knows how puzzles are generated or scored.

mod direction;
mod error;
mod grid;
mod placement;
mod text;
mod word;

pub use direction::Direction;
pub use error::{ErrorKind, FormatError, PuzzleError};
pub use grid::{DEFAULT_ALPHABET, EMPTY_CELL, Grid};
pub use placement::Placement;
pub use text::{parse_grid, serialize_grid};
pub use word::{Word, WordError};
