//! Normalized puzzle word
//!
//! Word sources hand back arbitrary strings. A `Word` is the engine's view of one
//! of them: trimmed, uppercased, and made only of the letters `A-Z`. Grid cells
//! use the same ASCII case rule, so a placed word always reads back the same.

use std::fmt;

/// A normalized word-search word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ContainsWhitespace(String),
    InvalidChar { word: String, ch: char },
    TooShort { word: String, min: usize },
    TooLong { word: String, max: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::ContainsWhitespace(word) => {
                write!(f, "Word '{word}' must not contain whitespace")
            }
            Self::InvalidChar { word, ch } => {
                write!(f, "Word '{word}' contains '{ch}', only letters A-Z are allowed")
            }
            Self::TooShort { word, min } => {
                write!(f, "Word '{word}' must be at least {min} letters")
            }
            Self::TooLong { word, max } => {
                write!(f, "Word '{word}' must be at most {max} letters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Minimum length of a placeable word
    pub const MIN_LEN: usize = 2;

    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty, contains whitespace, or
    /// has any character outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use wordsearch_engine::core::Word;
    ///
    /// let word = Word::new("  vector ").unwrap();
    /// assert_eq!(word.text(), "VECTOR");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("x2").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace(text));
        }

        if let Some(ch) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidChar { word: text, ch });
        }

        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// Create a Word and check it against placement length bounds
    ///
    /// # Errors
    /// Returns `WordError` if normalization fails or the length is outside
    /// `MIN_LEN..=max_len`.
    pub fn with_max_len(text: impl AsRef<str>, max_len: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        word.check_len(max_len)?;
        Ok(word)
    }

    /// Check the word against placement length bounds
    ///
    /// # Errors
    /// Returns `WordError::TooShort` or `WordError::TooLong`.
    pub fn check_len(&self, max_len: usize) -> Result<(), WordError> {
        if self.len() < Self::MIN_LEN {
            return Err(WordError::TooShort {
                word: self.text.clone(),
                min: Self::MIN_LEN,
            });
        }
        if self.len() > max_len {
            return Err(WordError::TooLong {
                word: self.text.clone(),
                max: max_len,
            });
        }
        Ok(())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; a `Word` is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
