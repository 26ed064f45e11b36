//! Grid verification pipeline
//!
//! Grid text from an untrusted puzzle source goes through parse, shape check,
//! scan and score in that order. Each stage that can reject the puzzle does so
//! with its own error variant, so a caller scoring many puzzles can tell a
//! malformed grid from a wrong-sized one from a genuinely low score.

use super::scanner::{MatchSet, find_words};
use super::scoring::AccuracyReport;
use super::validation::check_size;
use crate::core::{Grid, PuzzleError, Word, parse_grid};
use log::info;

/// A verified grid and how well it holds its words
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub grid: Grid,
    pub matches: MatchSet,
    pub report: AccuracyReport,
}

impl Evaluation {
    /// Fraction of words found exactly once
    #[must_use]
    pub const fn accuracy(&self) -> f64 {
        self.report.accuracy
    }
}

/// Scan a trusted grid for `words` and score it
///
/// Words are normalized to uppercase before searching.
///
/// # Errors
/// - `PuzzleError::EmptyInput` if `words` is empty
/// - `PuzzleError::InvalidWord` if a word is blank or has a character outside `A-Z`
pub fn evaluate_grid<S: AsRef<str>>(grid: Grid, words: &[S]) -> Result<Evaluation, PuzzleError> {
    if words.is_empty() {
        return Err(PuzzleError::EmptyInput);
    }

    let words = words
        .iter()
        .map(Word::new)
        .collect::<Result<Vec<_>, _>>()?;

    let matches = find_words(&grid, &words);
    let report = AccuracyReport::from_matches(&matches);

    info!(
        "{}/{} words found exactly once ({} missing, {} ambiguous)",
        report.unique,
        report.total(),
        report.missing,
        report.ambiguous
    );

    Ok(Evaluation {
        grid,
        matches,
        report,
    })
}

/// Parse, size-check, scan and score grid text from a puzzle source
///
/// # Errors
/// - `PuzzleError::EmptyInput` if `words` is empty
/// - `PuzzleError::Format` if the text is not a rectangular grid
/// - `PuzzleError::SizeMismatch` if the grid is not `rows x cols`
/// - `PuzzleError::InvalidWord` if a word is blank or has a character outside `A-Z`
///
/// # Examples
/// ```
/// use wordsearch_engine::core::ErrorKind;
/// use wordsearch_engine::search::evaluate_puzzle;
///
/// let eval = evaluate_puzzle("H E L L O\nW O R L D", &["hello", "world"], 2, 5).unwrap();
/// assert!((eval.accuracy() - 1.0).abs() < f64::EPSILON);
///
/// let err = evaluate_puzzle("H E L L O", &["hello"], 2, 5).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Dimension);
/// ```
pub fn evaluate_puzzle<S: AsRef<str>>(
    text: &str,
    words: &[S],
    rows: usize,
    cols: usize,
) -> Result<Evaluation, PuzzleError> {
    if words.is_empty() {
        return Err(PuzzleError::EmptyInput);
    }

    let grid = parse_grid(text)?;
    if !check_size(&grid, rows, cols) {
        return Err(PuzzleError::SizeMismatch {
            expected: (rows, cols),
            actual: grid.dimensions(),
        });
    }

    evaluate_grid(grid, words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorKind, FormatError};
    use crate::search::WordStatus;

    #[test]
    fn hello_world_pipeline() {
        let eval = evaluate_puzzle("H E L L O\nW O R L D\n", &["HELLO", "WORLD"], 2, 5).unwrap();

        assert_eq!(eval.matches.len(), 2);
        assert_eq!(eval.report.unique, 2);
        assert!((eval.accuracy() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn words_are_uppercased() {
        let eval = evaluate_puzzle("H E L L O\nW O R L D", &[" hello"], 2, 5).unwrap();
        assert_eq!(eval.report.statuses[0], ("HELLO".to_string(), WordStatus::Unique));
    }

    #[test]
    fn malformed_grid_is_a_format_error() {
        let err = evaluate_puzzle("H E L L O\nW O R L", &["HELLO"], 2, 5).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::Format(FormatError::RaggedRows { row: 1, .. })
        ));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn wrong_size_is_rejected_before_scanning() {
        let err = evaluate_puzzle("H E L L O\nW O R L D", &["HELLO"], 5, 5).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::SizeMismatch {
                expected: (5, 5),
                actual: (2, 5)
            }
        );
    }

    #[test]
    fn empty_word_list_is_an_error() {
        let empty: [&str; 0] = [];
        assert_eq!(
            evaluate_puzzle("A B\nC D", &empty, 2, 2).unwrap_err(),
            PuzzleError::EmptyInput
        );
        let grid = parse_grid("A B\nC D").unwrap();
        assert_eq!(
            evaluate_grid(grid, &empty).unwrap_err(),
            PuzzleError::EmptyInput
        );
    }

    #[test]
    fn blank_word_is_invalid() {
        let err = evaluate_puzzle("A B\nC D", &["AB", "  "], 2, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidWord);
    }

    #[test]
    fn words_and_grid_share_one_case_rule() {
        let eval = evaluate_puzzle("c a t\nx x x\nx x x", &["cat"], 3, 3).unwrap();
        assert!((eval.accuracy() - 1.0).abs() < f64::EPSILON);

        let err = evaluate_puzzle("é t é\nx x x\nx x x", &["été"], 3, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidWord);
    }

    #[test]
    fn low_score_is_not_an_error() {
        let eval = evaluate_puzzle("A B\nC D", &["XY", "ZW"], 2, 2).unwrap();
        assert!(eval.accuracy().abs() < f64::EPSILON);
        assert_eq!(eval.report.missing, 2);
    }
}
