//! Placer configuration

use crate::core::DEFAULT_ALPHABET;

/// What the placer does when a word cannot be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Abort the whole puzzle with `PuzzleError::Placement`
    Strict,
    /// Record the word as unplaced and keep going
    BestEffort,
}

/// Configuration for [`Placer`](super::Placer)
///
/// There is no `Default`: the failure mode changes what callers get back, so
/// it must be picked explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacerConfig {
    pub mode: PlacementMode,
    pub max_attempts_per_word: usize,
    pub alphabet: Vec<char>,
}

impl PlacerConfig {
    /// Attempts per word unless overridden
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

    /// Create a config with the default attempt budget and A-Z fill
    #[must_use]
    pub fn new(mode: PlacementMode) -> Self {
        Self {
            mode,
            max_attempts_per_word: Self::DEFAULT_MAX_ATTEMPTS,
            alphabet: DEFAULT_ALPHABET.chars().collect(),
        }
    }

    /// Shorthand for `PlacerConfig::new(PlacementMode::Strict)`
    #[must_use]
    pub fn strict() -> Self {
        Self::new(PlacementMode::Strict)
    }

    /// Shorthand for `PlacerConfig::new(PlacementMode::BestEffort)`
    #[must_use]
    pub fn best_effort() -> Self {
        Self::new(PlacementMode::BestEffort)
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts_per_word: usize) -> Self {
        self.max_attempts_per_word = max_attempts_per_word;
        self
    }

    /// Replace the fill alphabet; characters are uppercased and anything
    /// outside `A-Z` is dropped
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: &str) -> Self {
        self.alphabet = alphabet
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PlacerConfig::strict();
        assert_eq!(config.mode, PlacementMode::Strict);
        assert_eq!(config.max_attempts_per_word, 1000);
        assert_eq!(config.alphabet.len(), 26);
        assert_eq!(config.alphabet.first(), Some(&'A'));
    }

    #[test]
    fn builder_overrides() {
        let config = PlacerConfig::best_effort()
            .with_max_attempts(10)
            .with_alphabet("x y z");
        assert_eq!(config.mode, PlacementMode::BestEffort);
        assert_eq!(config.max_attempts_per_word, 10);
        assert_eq!(config.alphabet, vec!['X', 'Y', 'Z']);
    }
}
