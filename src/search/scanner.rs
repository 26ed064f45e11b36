//! Exhaustive word search
//!
//! Every cell is tried as a start in every direction, so the scanner finds all
//! straight-line occurrences of a word in any grid, including ones produced by
//! overlapping placements or by the random fill.

use crate::core::{Direction, Grid};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// One occurrence of a word: the cells it covers, first letter first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    pub direction: Direction,
    pub path: Vec<(usize, usize)>,
}

impl Match {
    /// First cell of the occurrence
    #[must_use]
    pub fn start(&self) -> Option<(usize, usize)> {
        self.path.first().copied()
    }

    /// Last cell of the occurrence
    #[must_use]
    pub fn end(&self) -> Option<(usize, usize)> {
        self.path.last().copied()
    }
}

/// Matches for a batch of words
///
/// Holds exactly one entry per distinct requested word, in the order the words
/// were first requested. A word with no occurrences maps to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    entries: Vec<(String, Vec<Match>)>,
}

impl MatchSet {
    /// Matches for `word`, or `None` if it was not requested
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&[Match]> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, matches)| matches.as_slice())
    }

    /// Iterate over `(word, matches)` in request order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Match])> {
        self.entries
            .iter()
            .map(|(word, matches)| (word.as_str(), matches.as_slice()))
    }

    /// Requested words in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Vec<Match>)> for MatchSet {
    /// Later duplicates of a word are dropped
    fn from_iter<I: IntoIterator<Item = (String, Vec<Match>)>>(iter: I) -> Self {
        let mut seen = FxHashSet::default();
        let entries = iter
            .into_iter()
            .filter(|(word, _)| seen.insert(word.clone()))
            .collect();
        Self { entries }
    }
}

/// Find every straight-line occurrence of `word` in `grid`
///
/// Comparison is exact and case-sensitive. A palindrome is reported once per
/// reading direction, so the same cells can appear in two matches. A
/// one-character word produces eight matches per cell holding it, one per
/// direction.
///
/// # Examples
/// ```
/// use wordsearch_engine::core::parse_grid;
/// use wordsearch_engine::search::find_word;
///
/// let grid = parse_grid("H E L L O\nW O R L D").unwrap();
/// let matches = find_word(&grid, "HELLO");
///
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].path, vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
/// assert!(find_word(&grid, "MISSING").is_empty());
/// ```
#[must_use]
pub fn find_word(grid: &Grid, word: &str) -> Vec<Match> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let (rows, cols) = grid.dimensions();
    let mut matches = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            // Cheap rejection before walking eight directions
            if grid.get(row, col) != Some(chars[0]) {
                continue;
            }
            for direction in Direction::ALL {
                if let Some(path) = walk(grid, &chars, (row, col), direction) {
                    matches.push(Match { direction, path });
                }
            }
        }
    }

    matches
}

fn walk(
    grid: &Grid,
    chars: &[char],
    start: (usize, usize),
    direction: Direction,
) -> Option<Vec<(usize, usize)>> {
    let (rows, cols) = grid.dimensions();
    let mut path = Vec::with_capacity(chars.len());

    for (i, &ch) in chars.iter().enumerate() {
        let (r, c) = direction.step(start, i, rows, cols)?;
        if grid.get(r, c) != Some(ch) {
            return None;
        }
        path.push((r, c));
    }

    Some(path)
}

/// Search for each word independently, in parallel
///
/// # Examples
/// ```
/// use wordsearch_engine::core::parse_grid;
/// use wordsearch_engine::search::find_words;
///
/// let grid = parse_grid("H E L L O\nW O R L D").unwrap();
/// let matches = find_words(&grid, &["HELLO", "WORLD", "HELLO"]);
///
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches.get("WORLD").unwrap().len(), 1);
/// ```
#[must_use]
pub fn find_words<S: AsRef<str> + Sync>(grid: &Grid, words: &[S]) -> MatchSet {
    words
        .par_iter()
        .map(|word| {
            let word = word.as_ref();
            (word.to_string(), find_word(grid, word))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
