//! Puzzle checking command
//!
//! Verifies grid text from any source against a word list.

use crate::core::{PuzzleError, parse_grid};
use crate::search::{Evaluation, evaluate_grid, evaluate_puzzle};

/// Configuration for checking a puzzle
pub struct CheckConfig {
    pub text: String,
    pub words: Vec<String>,
    /// Expected `(rows, cols)`; `None` accepts whatever shape the text has
    pub expected_size: Option<(usize, usize)>,
}

/// Parse, size-check and scan a puzzle
///
/// # Errors
///
/// Returns an error if the grid text is malformed, has the wrong size, or the
/// word list is empty or contains blank words.
pub fn check_puzzle(config: &CheckConfig) -> Result<Evaluation, PuzzleError> {
    match config.expected_size {
        Some((rows, cols)) => evaluate_puzzle(&config.text, &config.words, rows, cols),
        None => evaluate_grid(parse_grid(&config.text)?, &config.words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    fn config(expected_size: Option<(usize, usize)>) -> CheckConfig {
        CheckConfig {
            text: "H E L L O\nW O R L D\nH E Y H I".to_string(),
            words: vec!["HELLO".to_string(), "WORLD".to_string(), "HI".to_string()],
            expected_size,
        }
    }

    #[test]
    fn check_without_size() {
        let eval = check_puzzle(&config(None)).unwrap();

        // HI appears once forward at the end of row 2
        assert_eq!(eval.report.unique, 3);
        assert_eq!(eval.grid.dimensions(), (3, 5));
    }

    #[test]
    fn check_with_matching_size() {
        assert!(check_puzzle(&config(Some((3, 5)))).is_ok());
    }

    #[test]
    fn check_with_wrong_size() {
        let err = check_puzzle(&config(Some((5, 5)))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Dimension);
    }
}
