//! Word list loading utilities
//!
//! Word files hold one word per line; comma-separated lines are also accepted
//! since that is what list-producing tools tend to emit.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Split word-list text into trimmed, non-empty entries
#[must_use]
pub fn split_entries(content: &str) -> Vec<String> {
    content
        .lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && !entry.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load raw entries from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordsearch_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(split_entries(&content))
}

/// Convert a string slice to `Word`s, skipping anything outside `2..=max_len`
///
/// # Examples
/// ```
/// use wordsearch_engine::wordlists::loader::words_from_slice;
/// use wordsearch_engine::wordlists::MATH;
///
/// let words = words_from_slice(MATH, 5);
/// assert!(words.iter().all(|w| w.len() <= 5));
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], max_len: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_max_len(s, max_len).ok())
        .collect()
}
