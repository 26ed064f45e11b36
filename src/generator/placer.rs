//! Randomized word placement
//!
//! Each word gets up to `max_attempts_per_word` tries. A try picks a uniformly
//! random start cell and direction, rejects it if the word would run off the
//! grid, and otherwise checks every cell on the path before committing any of
//! them. Words may cross where their letters agree.
//!
//! All randomness comes from the `Rng` passed in, so a seeded generator always
//! reproduces the same puzzle.

use super::config::{PlacementMode, PlacerConfig};
use crate::core::{Direction, Grid, Placement, PuzzleError, Word, WordError};
use log::{debug, warn};
use rand::Rng;

/// A generated grid together with how it was built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    placements: Vec<Placement>,
    unplaced: Vec<Word>,
}

impl Puzzle {
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placements in input order
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Words that ran out of attempts (best-effort mode only)
    #[must_use]
    pub fn unplaced(&self) -> &[Word] {
        &self.unplaced
    }

    /// True when every input word was placed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Placed words in input order
    #[must_use]
    pub fn placed_words(&self) -> Vec<&Word> {
        self.placements.iter().map(|p| &p.word).collect()
    }

    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Word-search generator
pub struct Placer {
    config: PlacerConfig,
}

impl Placer {
    #[must_use]
    pub const fn new(config: PlacerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PlacerConfig {
        &self.config
    }

    /// Build a `rows x cols` puzzle containing `words`
    ///
    /// Words are normalized to uppercase first. A word longer than
    /// `min(rows, cols)` is rejected without any attempts, as is every word
    /// when `max_attempts_per_word` is zero.
    ///
    /// # Errors
    /// - `PuzzleError::EmptyInput` if `words` is empty
    /// - `PuzzleError::Dimension` if `rows` or `cols` is zero
    /// - `PuzzleError::InvalidWord` if a word is blank, has a character outside
    ///   `A-Z` or is shorter than two letters
    /// - `PuzzleError::Placement` in strict mode when a word cannot be placed
    /// - `PuzzleError::EmptyAlphabet` if the fill alphabet is empty
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordsearch_engine::generator::{Placer, PlacerConfig};
    ///
    /// let placer = Placer::new(PlacerConfig::strict());
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let puzzle = placer.generate(&["ring", "group", "field"], 7, 7, &mut rng).unwrap();
    ///
    /// assert_eq!(puzzle.grid().dimensions(), (7, 7));
    /// assert_eq!(puzzle.placements().len(), 3);
    /// assert!(puzzle.grid().is_filled());
    /// ```
    pub fn generate<S, R>(
        &self,
        words: &[S],
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Puzzle, PuzzleError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if words.is_empty() {
            return Err(PuzzleError::EmptyInput);
        }
        if self.config.alphabet.is_empty() {
            return Err(PuzzleError::EmptyAlphabet);
        }

        let mut grid = Grid::new(rows, cols)?;
        let max_len = rows.min(cols);

        // Normalize everything up front so a bad word fails before any work
        let words = words
            .iter()
            .map(|w| -> Result<Word, PuzzleError> {
                let word = Word::new(w)?;
                if word.len() < Word::MIN_LEN {
                    return Err(WordError::TooShort {
                        word: word.text().to_string(),
                        min: Word::MIN_LEN,
                    }
                    .into());
                }
                Ok(word)
            })
            .collect::<Result<Vec<_>, PuzzleError>>()?;

        if self.config.mode == PlacementMode::Strict
            && let Some(word) = words.iter().find(|w| w.len() > max_len)
        {
            return Err(PuzzleError::Placement {
                word: word.text().to_string(),
                attempts: 0,
            });
        }

        let mut placements = Vec::with_capacity(words.len());
        let mut unplaced = Vec::new();

        for word in words {
            let placed = if word.len() > max_len {
                debug!("'{word}' is longer than {max_len}, skipping attempts");
                None
            } else {
                self.place_word(&mut grid, &word, rng)
            };

            match (placed, self.config.mode) {
                (Some(placement), _) => placements.push(placement),
                (None, PlacementMode::Strict) => {
                    return Err(PuzzleError::Placement {
                        word: word.text().to_string(),
                        attempts: self.config.max_attempts_per_word,
                    });
                }
                (None, PlacementMode::BestEffort) => {
                    warn!("could not place '{word}', leaving it out of the puzzle");
                    unplaced.push(word);
                }
            }
        }

        grid.fill_remaining(&self.config.alphabet, rng)?;

        Ok(Puzzle {
            grid,
            placements,
            unplaced,
        })
    }

    /// Try to place one word, committing nothing unless the whole path fits
    fn place_word<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &Word,
        rng: &mut R,
    ) -> Option<Placement> {
        let (rows, cols) = grid.dimensions();
        let last = word.len() - 1;

        for attempt in 1..=self.config.max_attempts_per_word {
            let start = (rng.random_range(0..rows), rng.random_range(0..cols));
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];

            if direction.step(start, last, rows, cols).is_none() {
                continue;
            }

            let path: Vec<(usize, usize)> = (0..=last)
                .filter_map(|i| direction.step(start, i, rows, cols))
                .collect();

            let fits = path
                .iter()
                .zip(word.chars())
                .all(|(&(r, c), &ch)| grid.accepts(r, c, ch));
            if !fits {
                continue;
            }

            for (&(r, c), &ch) in path.iter().zip(word.chars()) {
                let occupied = grid.try_occupy(r, c, ch);
                debug_assert!(occupied, "path was checked before committing");
            }

            debug!(
                "placed '{word}' at ({}, {}) going {direction} after {attempt} attempt(s)",
                start.0, start.1
            );
            return Some(Placement::new(word.clone(), start, direction));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::find_word;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const MATH_WORDS: [&str; 5] = ["ANGLE", "SUM", "PRIME", "RATIO", "AREA"];

    #[test]
    fn every_placed_word_is_found() {
        let placer = Placer::new(PlacerConfig::best_effort());

        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = placer.generate(&MATH_WORDS, 7, 7, &mut rng).unwrap();

            for word in puzzle.placed_words() {
                let matches = find_word(puzzle.grid(), word.text());
                assert!(
                    !matches.is_empty(),
                    "seed {seed}: '{word}' was placed but not found"
                );
            }
        }
    }

    #[test]
    fn placement_paths_hold_their_letters() {
        let placer = Placer::new(PlacerConfig::strict());
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle = placer.generate(&MATH_WORDS, 8, 8, &mut rng).unwrap();

        for placement in puzzle.placements() {
            for (&(r, c), &ch) in placement.path().iter().zip(placement.word.chars()) {
                assert_eq!(puzzle.grid().get(r, c), Some(ch));
            }
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let placer = Placer::new(PlacerConfig::strict());

        let a = placer
            .generate(&MATH_WORDS, 7, 7, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = placer
            .generate(&MATH_WORDS, 7, 7, &mut StdRng::seed_from_u64(99))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn words_are_normalized() {
        let placer = Placer::new(PlacerConfig::strict());
        let mut rng = StdRng::seed_from_u64(1);
        let puzzle = placer.generate(&[" cube "], 5, 5, &mut rng).unwrap();

        assert_eq!(puzzle.placements()[0].word.text(), "CUBE");
        assert_eq!(find_word(puzzle.grid(), "CUBE").len(), 1);
    }

    #[test]
    fn placed_grid_survives_text_round_trip() {
        let placer = Placer::new(PlacerConfig::strict());
        let mut rng = StdRng::seed_from_u64(1);
        let puzzle = placer.generate(&MATH_WORDS, 7, 7, &mut rng).unwrap();

        let text = crate::core::serialize_grid(puzzle.grid());
        assert_eq!(&crate::core::parse_grid(&text).unwrap(), puzzle.grid());
    }

    #[test]
    fn rejects_words_with_non_letters() {
        let placer = Placer::new(PlacerConfig::strict());
        let mut rng = StdRng::seed_from_u64(1);

        for word in ["A.B", "PI2", "ÉTÉ"] {
            let err = placer.generate(&[word], 5, 5, &mut rng).unwrap_err();
            assert!(
                matches!(err, PuzzleError::InvalidWord(WordError::InvalidChar { .. })),
                "{word}: {err:?}"
            );
        }
    }

    #[test]
    fn alphabet_without_letters_is_empty() {
        let placer = Placer::new(PlacerConfig::strict().with_alphabet(". 1"));
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            placer.generate(&["AB"], 3, 3, &mut rng),
            Err(PuzzleError::EmptyAlphabet)
        );
    }

    #[test]
    fn word_longer_than_grid_fails_for_every_seed() {
        let placer = Placer::new(PlacerConfig::strict());

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let err = placer.generate(&["VECTOR"], 5, 5, &mut rng).unwrap_err();
            assert_eq!(
                err,
                PuzzleError::Placement {
                    word: "VECTOR".to_string(),
                    attempts: 0
                }
            );
        }
    }

    #[test]
    fn strict_rejects_long_word_before_placing_others() {
        let placer = Placer::new(PlacerConfig::strict());
        let mut rng = StdRng::seed_from_u64(2);
        let err = placer
            .generate(&["SUM", "AREA", "VECTOR"], 5, 5, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            PuzzleError::Placement {
                word: "VECTOR".to_string(),
                attempts: 0
            }
        );
    }

    #[test]
    fn length_limit_uses_shorter_side() {
        let placer = Placer::new(PlacerConfig::strict());
        let mut rng = StdRng::seed_from_u64(0);
        let err = placer.generate(&["ABCD"], 3, 10, &mut rng).unwrap_err();
        assert_eq!(err.kind(), crate::core::ErrorKind::Placement);
    }

    #[test]
    fn best_effort_records_unplaced_words() {
        let placer = Placer::new(PlacerConfig::best_effort());
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle = placer
            .generate(&["SINE", "HYPOTENUSE", "COS"], 5, 5, &mut rng)
            .unwrap();

        assert!(!puzzle.is_complete());
        assert_eq!(puzzle.unplaced().len(), 1);
        assert_eq!(puzzle.unplaced()[0].text(), "HYPOTENUSE");
        assert_eq!(puzzle.placements().len(), 2);
        assert!(puzzle.grid().is_filled());
    }

    #[test]
    fn zero_budget_never_places() {
        let placer = Placer::new(PlacerConfig::strict().with_max_attempts(0));
        let mut rng = StdRng::seed_from_u64(0);
        let err = placer.generate(&["AB"], 2, 2, &mut rng).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::Placement {
                word: "AB".to_string(),
                attempts: 0
            }
        );
    }

    #[test]
    fn conflicting_words_eventually_fail_in_strict_mode() {
        // A 2x2 grid holds four letters; three disjoint pairs need six.
        let placer = Placer::new(PlacerConfig::strict().with_max_attempts(200));
        let mut rng = StdRng::seed_from_u64(8);
        let err = placer
            .generate(&["AB", "CD", "EF"], 2, 2, &mut rng)
            .unwrap_err();
        assert!(matches!(err, PuzzleError::Placement { attempts: 200, .. }));
    }

    #[test]
    fn rejects_empty_input_and_bad_dimensions() {
        let placer = Placer::new(PlacerConfig::strict());
        let mut rng = StdRng::seed_from_u64(0);
        let empty: [&str; 0] = [];

        assert_eq!(
            placer.generate(&empty, 5, 5, &mut rng),
            Err(PuzzleError::EmptyInput)
        );
        assert_eq!(
            placer.generate(&["AB"], 0, 5, &mut rng),
            Err(PuzzleError::Dimension { rows: 0, cols: 5 })
        );
    }

    #[test]
    fn rejects_single_letter_words() {
        let placer = Placer::new(PlacerConfig::best_effort());
        let mut rng = StdRng::seed_from_u64(0);
        let err = placer.generate(&["X"], 5, 5, &mut rng).unwrap_err();
        assert_eq!(err.kind(), crate::core::ErrorKind::InvalidWord);
        assert_eq!(
            err,
            PuzzleError::InvalidWord(WordError::TooShort {
                word: "X".to_string(),
                min: 2
            })
        );
    }

    #[test]
    fn custom_alphabet_fills_grid() {
        let placer = Placer::new(PlacerConfig::strict().with_alphabet("Z"));
        let mut rng = StdRng::seed_from_u64(4);
        let puzzle = placer.generate(&["AB"], 3, 3, &mut rng).unwrap();

        let path = puzzle.placements()[0].path();
        for r in 0..3 {
            for c in 0..3 {
                if !path.contains(&(r, c)) {
                    assert_eq!(puzzle.grid().get(r, c), Some('Z'));
                }
            }
        }
    }

    #[test]
    fn duplicate_words_are_placed_independently() {
        let placer = Placer::new(PlacerConfig::strict());
        let mut rng = StdRng::seed_from_u64(12);
        let puzzle = placer.generate(&["MEAN", "MEAN"], 6, 6, &mut rng).unwrap();

        assert_eq!(puzzle.placements().len(), 2);
        // The two copies may overlap exactly, so at least one match.
        assert!(!find_word(puzzle.grid(), "MEAN").is_empty());
    }
}
