//! Error taxonomy for the puzzle engine
//!
//! Every fallible engine operation returns a [`PuzzleError`]. Callers that need
//! to classify failures (for example when scoring many generated puzzles) use
//! [`PuzzleError::kind`] instead of matching on the full variant.

use super::word::WordError;
use std::fmt;

/// Problems with grid text handed to [`parse_grid`](super::parse_grid)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No non-blank lines in the input
    Empty,
    /// A row has a different number of cells than the first row
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A whitespace-separated token is longer than one character
    MultiCharCell {
        row: usize,
        col: usize,
        token: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid text contains no rows"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "all rows must have the same number of letters: row {row} has {found}, expected {expected}"
            ),
            Self::MultiCharCell { row, col, token } => {
                write!(f, "cell ({row}, {col}) must be a single character, got '{token}'")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Coarse classification of a [`PuzzleError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    Dimension,
    Format,
    Placement,
    EmptyInput,
    InvalidWord,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dimension => "dimension",
            Self::Format => "format",
            Self::Placement => "placement",
            Self::EmptyInput => "empty input",
            Self::InvalidWord => "invalid word",
            Self::Config => "config",
        };
        f.pad(name)
    }
}

/// Error type for all engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Requested a grid with zero rows or columns
    Dimension { rows: usize, cols: usize },
    /// A grid does not have the dimensions it was requested with
    SizeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Grid text could not be parsed
    Format(FormatError),
    /// A word could not be placed within its attempt budget.
    ///
    /// `attempts == 0` means the word was rejected before any attempt, either
    /// because it cannot fit the grid in any direction or because the attempt
    /// budget is zero.
    Placement { word: String, attempts: usize },
    /// Placement or evaluation was invoked without any words
    EmptyInput,
    /// A word from a word source failed normalization
    InvalidWord(WordError),
    /// The fill alphabet has no characters
    EmptyAlphabet,
}

impl PuzzleError {
    /// Classify this error for reporting
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Dimension { .. } | Self::SizeMismatch { .. } => ErrorKind::Dimension,
            Self::Format(_) => ErrorKind::Format,
            Self::Placement { .. } => ErrorKind::Placement,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::InvalidWord(_) => ErrorKind::InvalidWord,
            Self::EmptyAlphabet => ErrorKind::Config,
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "expected a {}x{} grid, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::Format(e) => write!(f, "malformed grid: {e}"),
            Self::Placement { word, attempts: 0 } => {
                write!(f, "word '{word}' was rejected before any placement attempt")
            }
            Self::Placement { word, attempts } => {
                write!(f, "could not place '{word}' after {attempts} attempts")
            }
            Self::EmptyInput => write!(f, "word list is empty"),
            Self::InvalidWord(e) => write!(f, "invalid word: {e}"),
            Self::EmptyAlphabet => write!(f, "fill alphabet is empty"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            Self::InvalidWord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FormatError> for PuzzleError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<WordError> for PuzzleError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}
