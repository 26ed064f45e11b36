//! Puzzle accuracy
//!
//! A word-search word is only useful if it occurs exactly once. Missing words
//! and words with several occurrences (from crossing placements, palindromes
//! or an unlucky fill) both count against the puzzle.

use super::scanner::{Match, MatchSet};
use std::fmt;

/// How a single word fared in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStatus {
    /// Exactly one occurrence
    Unique,
    /// No occurrences
    Missing,
    /// More than one occurrence
    Ambiguous(usize),
}

impl WordStatus {
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Unique)
    }
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unique => write!(f, "found once"),
            Self::Missing => write!(f, "not found"),
            Self::Ambiguous(n) => write!(f, "found {n} times"),
        }
    }
}

/// Classify a word by its match list
#[must_use]
pub const fn classify(matches: &[Match]) -> WordStatus {
    match matches.len() {
        0 => WordStatus::Missing,
        1 => WordStatus::Unique,
        n => WordStatus::Ambiguous(n),
    }
}

/// Fraction of words with exactly one match
///
/// An empty `MatchSet` scores `1.0`: with nothing to find, nothing is wrong.
///
/// # Examples
/// ```
/// use wordsearch_engine::core::parse_grid;
/// use wordsearch_engine::search::{find_words, score_accuracy};
///
/// let grid = parse_grid("H E L L O\nW O R L D").unwrap();
/// let matches = find_words(&grid, &["HELLO", "WORLD", "EARTH"]);
///
/// assert!((score_accuracy(&matches) - 2.0 / 3.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn score_accuracy(matches: &MatchSet) -> f64 {
    if matches.is_empty() {
        return 1.0;
    }
    let unique = matches
        .iter()
        .filter(|(_, m)| classify(m).is_unique())
        .count();
    unique as f64 / matches.len() as f64
}

/// Per-word breakdown of a `MatchSet` along with its score
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyReport {
    pub statuses: Vec<(String, WordStatus)>,
    pub unique: usize,
    pub missing: usize,
    pub ambiguous: usize,
    pub accuracy: f64,
}

impl AccuracyReport {
    #[must_use]
    pub fn from_matches(matches: &MatchSet) -> Self {
        let statuses: Vec<(String, WordStatus)> = matches
            .iter()
            .map(|(word, m)| (word.to_string(), classify(m)))
            .collect();

        let count = |pred: fn(&WordStatus) -> bool| statuses.iter().filter(|(_, s)| pred(s)).count();
        let unique = count(|s| matches!(s, WordStatus::Unique));
        let missing = count(|s| matches!(s, WordStatus::Missing));
        let ambiguous = count(|s| matches!(s, WordStatus::Ambiguous(_)));

        Self {
            statuses,
            unique,
            missing,
            ambiguous,
            accuracy: score_accuracy(matches),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.statuses.len()
    }
}
