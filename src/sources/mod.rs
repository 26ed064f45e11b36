//! Word and puzzle sources
//!
//! The engine never picks words or draws grids through anything smarter than
//! the [`Placer`]. Anything else (a generative model, a web service, a human)
//! plugs in behind these traits and hands back plain data, which the engine
//! normalizes and verifies before trusting.

use crate::core::{PuzzleError, Word, WordError, serialize_grid};
use crate::generator::{Placer, PlacerConfig};
use crate::wordlists::{loader, topic_words};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error from a word or puzzle source
#[derive(Debug)]
pub enum SourceError {
    Io(io::Error),
    UnknownTopic(String),
    Word(WordError),
    Puzzle(PuzzleError),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read source: {e}"),
            Self::UnknownTopic(topic) => write!(f, "no word list for topic '{topic}'"),
            Self::Word(e) => write!(f, "{e}"),
            Self::Puzzle(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Word(e) => Some(e),
            Self::Puzzle(e) => Some(e),
            Self::UnknownTopic(_) => None,
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<WordError> for SourceError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<PuzzleError> for SourceError {
    fn from(e: PuzzleError) -> Self {
        Self::Puzzle(e)
    }
}

/// Something that suggests words for a topic
pub trait WordSource {
    /// Return up to `count` candidate words about `topic`
    ///
    /// `max_len` is a hint: sources should prefer words that fit, but the
    /// engine checks lengths itself through [`normalize_words`].
    ///
    /// # Errors
    /// Returns `SourceError` if the source cannot produce words.
    fn pick_words(
        &self,
        topic: &str,
        count: usize,
        max_len: usize,
    ) -> Result<Vec<String>, SourceError>;
}

/// Something that turns a word list into grid text
pub trait PuzzleSource {
    /// Return grid text meant to be `rows x cols` and contain `words`
    ///
    /// # Errors
    /// Returns `SourceError` if no grid text can be produced.
    fn make_puzzle(
        &mut self,
        words: &[Word],
        rows: usize,
        cols: usize,
    ) -> Result<String, SourceError>;
}

/// Uppercase raw candidates and check each fits `2..=max_len`
///
/// # Errors
/// Returns the first `WordError` encountered.
///
/// # Examples
/// ```
/// use wordsearch_engine::sources::normalize_words;
///
/// let words = normalize_words(&["sum", "Ratio"], 5).unwrap();
/// assert_eq!(words[1].text(), "RATIO");
/// assert!(normalize_words(&["tangent"], 5).is_err());
/// ```
pub fn normalize_words<S: AsRef<str>>(raw: &[S], max_len: usize) -> Result<Vec<Word>, WordError> {
    raw.iter().map(|w| Word::with_max_len(w, max_len)).collect()
}

/// Picks from the built-in topic lists
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedWordSource;

impl WordSource for EmbeddedWordSource {
    fn pick_words(
        &self,
        topic: &str,
        count: usize,
        max_len: usize,
    ) -> Result<Vec<String>, SourceError> {
        let words = topic_words(topic).ok_or_else(|| SourceError::UnknownTopic(topic.to_string()))?;
        Ok(loader::words_from_slice(words, max_len)
            .into_iter()
            .take(count)
            .map(|w| w.text().to_string())
            .collect())
    }
}

/// Reads candidates from a word file, ignoring the topic
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn pick_words(
        &self,
        _topic: &str,
        count: usize,
        _max_len: usize,
    ) -> Result<Vec<String>, SourceError> {
        let mut entries = loader::load_from_file(&self.path)?;
        entries.truncate(count);
        Ok(entries)
    }
}

/// Builds puzzles with the [`Placer`] from a seeded generator
pub struct PlacerPuzzleSource {
    placer: Placer,
    rng: StdRng,
}

impl PlacerPuzzleSource {
    #[must_use]
    pub fn new(config: PlacerConfig, seed: u64) -> Self {
        Self {
            placer: Placer::new(config),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PuzzleSource for PlacerPuzzleSource {
    fn make_puzzle(
        &mut self,
        words: &[Word],
        rows: usize,
        cols: usize,
    ) -> Result<String, SourceError> {
        let puzzle = self.placer.generate(words, rows, cols, &mut self.rng)?;
        Ok(serialize_grid(puzzle.grid()))
    }
}

/// Returns fixed grid text regardless of the words asked for
#[derive(Debug, Clone)]
pub struct TextPuzzleSource {
    text: String,
}

impl TextPuzzleSource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl PuzzleSource for TextPuzzleSource {
    fn make_puzzle(
        &mut self,
        _words: &[Word],
        _rows: usize,
        _cols: usize,
    ) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

/// Words and unverified grid text from one round trip through the sources
#[derive(Debug, Clone)]
pub struct WordSearch {
    pub words: Vec<Word>,
    pub puzzle: String,
}

/// Ask `words` for `n_words` words on `topic`, then ask `puzzles` for a
/// `rows x cols` grid containing them
///
/// The returned grid text has not been checked; pass it to
/// [`evaluate_puzzle`](crate::search::evaluate_puzzle).
///
/// # Errors
/// Returns `SourceError` if either source fails or a word does not fit
/// `min(rows, cols)`.
pub fn create_word_search<W, P>(
    words: &W,
    puzzles: &mut P,
    topic: &str,
    n_words: usize,
    rows: usize,
    cols: usize,
) -> Result<WordSearch, SourceError>
where
    W: WordSource + ?Sized,
    P: PuzzleSource + ?Sized,
{
    let max_len = rows.min(cols);
    let raw = words.pick_words(topic, n_words, max_len)?;
    let words = normalize_words(&raw, max_len)?;
    let puzzle = puzzles.make_puzzle(&words, rows, cols)?;
    Ok(WordSearch { words, puzzle })
}
