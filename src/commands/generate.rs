//! Puzzle generation command
//!
//! Builds a puzzle with the placer and immediately re-checks it with the
//! scanner, since crossings and the random fill can add extra occurrences.

use crate::core::{PuzzleError, Word};
use crate::generator::{Placer, PlacerConfig, Puzzle};
use crate::search::{Evaluation, evaluate_grid};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for generating a puzzle
pub struct GenerateConfig {
    pub words: Vec<Word>,
    pub rows: usize,
    pub cols: usize,
    pub seed: u64,
    pub placer: PlacerConfig,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(words: Vec<Word>, rows: usize, cols: usize, placer: PlacerConfig) -> Self {
        Self {
            words,
            rows,
            cols,
            seed: 0,
            placer,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Result of generating a puzzle
pub struct GenerateResult {
    pub seed: u64,
    pub puzzle: Puzzle,
    /// Scan of the finished grid for every requested word, placed or not
    pub evaluation: Evaluation,
}

/// Generate a puzzle and score it
///
/// # Errors
///
/// Returns an error if placement fails (strict mode) or the inputs are invalid.
pub fn generate_puzzle(config: GenerateConfig) -> Result<GenerateResult, PuzzleError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let placer = Placer::new(config.placer);

    let puzzle = placer.generate(&config.words, config.rows, config.cols, &mut rng)?;
    let evaluation = evaluate_grid(puzzle.grid().clone(), &config.words)?;

    Ok(GenerateResult {
        seed: config.seed,
        puzzle,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::normalize_words;

    fn words() -> Vec<Word> {
        normalize_words(&["sum", "area", "prime", "ratio"], 6).unwrap()
    }

    #[test]
    fn generate_places_and_scores() {
        let config = GenerateConfig::new(words(), 6, 6, PlacerConfig::strict()).with_seed(17);
        let result = generate_puzzle(config).unwrap();

        assert_eq!(result.seed, 17);
        assert_eq!(result.puzzle.placements().len(), 4);
        assert_eq!(result.evaluation.report.total(), 4);
        assert_eq!(result.evaluation.report.missing, 0);
        assert!(result.evaluation.accuracy() > 0.0);
    }

    #[test]
    fn generate_is_reproducible() {
        let a = generate_puzzle(GenerateConfig::new(words(), 6, 6, PlacerConfig::strict()).with_seed(5))
            .unwrap();
        let b = generate_puzzle(GenerateConfig::new(words(), 6, 6, PlacerConfig::strict()).with_seed(5))
            .unwrap();

        assert_eq!(a.puzzle, b.puzzle);
    }

    #[test]
    fn unplaced_words_show_up_as_missing_or_accidental() {
        let words = normalize_words(&["sum", "hypotenuse"], 10).unwrap();
        let config = GenerateConfig::new(words, 4, 4, PlacerConfig::best_effort());
        let result = generate_puzzle(config).unwrap();

        assert_eq!(result.puzzle.unplaced().len(), 1);
        assert_eq!(result.evaluation.report.total(), 2);
        assert!(result.evaluation.accuracy() <= 0.5);
    }

    #[test]
    fn strict_failure_propagates() {
        let words = normalize_words(&["hypotenuse"], 10).unwrap();
        let config = GenerateConfig::new(words, 4, 4, PlacerConfig::strict());
        assert!(matches!(
            generate_puzzle(config),
            Err(PuzzleError::Placement { attempts: 0, .. })
        ));
    }
}
