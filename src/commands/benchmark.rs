//! Benchmark command
//!
//! Generates many puzzles from consecutive seeds, runs each through the full
//! verification pipeline, and summarizes how often placement fails and how
//! accurate the successful puzzles are. Failures are counted by kind instead of
//! being folded into the accuracy numbers.

use crate::core::{ErrorKind, PuzzleError, Word, serialize_grid};
use crate::generator::{Placer, PlacerConfig};
use crate::search::evaluate_puzzle;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub words: Vec<Word>,
    pub rows: usize,
    pub cols: usize,
    pub runs: usize,
    pub first_seed: u64,
    pub placer: PlacerConfig,
    pub show_progress: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub runs: usize,
    /// Accuracy of every puzzle that made it through the pipeline
    pub accuracies: Vec<f64>,
    pub failures: BTreeMap<ErrorKind, usize>,
    pub mean_accuracy: f64,
    pub median_accuracy: f64,
    pub perfect_puzzles: usize,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

impl BenchmarkResult {
    /// Number of runs that produced a verified puzzle
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.accuracies.len()
    }

    /// Number of runs that failed before scoring
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.values().sum()
    }
}

/// Generate and verify one puzzle per seed
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig) -> BenchmarkResult {
    let placer = Placer::new(config.placer.clone());

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.runs as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut accuracies = Vec::with_capacity(config.runs);
    let mut failures: BTreeMap<ErrorKind, usize> = BTreeMap::new();

    for run in 0..config.runs {
        let seed = config.first_seed.wrapping_add(run as u64);

        match run_once(&placer, config, seed) {
            Ok(accuracy) => accuracies.push(accuracy),
            Err(e) => {
                log::debug!("seed {seed}: {e}");
                *failures.entry(e.kind()).or_insert(0) += 1;
            }
        }

        if run % 10 == 0 && !accuracies.is_empty() {
            pb.set_message(format!("Mean: {:.3}", mean(&accuracies)));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let perfect_puzzles = accuracies
        .iter()
        .filter(|&&a| (a - 1.0).abs() < f64::EPSILON)
        .count();

    BenchmarkResult {
        runs: config.runs,
        mean_accuracy: mean(&accuracies),
        median_accuracy: median(&accuracies),
        perfect_puzzles,
        accuracies,
        failures,
        duration,
        puzzles_per_second: config.runs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn run_once(placer: &Placer, config: &BenchmarkConfig, seed: u64) -> Result<f64, PuzzleError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let puzzle = placer.generate(&config.words, config.rows, config.cols, &mut rng)?;
    // Go through the text format, as an external puzzle would
    let text = serialize_grid(puzzle.grid());
    let evaluation = evaluate_puzzle(&text, &config.words, config.rows, config.cols)?;
    Ok(evaluation.accuracy())
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len().is_multiple_of(2) {
        f64::midpoint(sorted[mid - 1], sorted[mid])
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::normalize_words;

    fn config(words: &[&str], rows: usize, runs: usize, placer: PlacerConfig) -> BenchmarkConfig {
        BenchmarkConfig {
            words: normalize_words(words, usize::MAX).unwrap(),
            rows,
            cols: rows,
            runs,
            first_seed: 0,
            placer,
            show_progress: false,
        }
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&config(
            &["ANGLE", "SUM", "PRIME", "RATIO", "AREA"],
            7,
            20,
            PlacerConfig::strict(),
        ));

        assert_eq!(result.runs, 20);
        assert_eq!(result.succeeded() + result.failed(), 20);
        assert!(result.mean_accuracy >= 0.0 && result.mean_accuracy <= 1.0);
        assert!(result.perfect_puzzles <= result.succeeded());
    }

    #[test]
    fn benchmark_classifies_failures() {
        let result = run_benchmark(&config(&["VECTOR"], 5, 10, PlacerConfig::strict()));

        assert_eq!(result.succeeded(), 0);
        assert_eq!(result.failures.get(&ErrorKind::Placement), Some(&10));
        assert!(result.mean_accuracy.abs() < f64::EPSILON);
    }

    #[test]
    fn seeds_wrap_past_u64_max() {
        let mut cfg = config(&["SUM", "AREA"], 5, 3, PlacerConfig::strict());
        cfg.first_seed = u64::MAX;

        let result = run_benchmark(&cfg);
        assert_eq!(result.succeeded() + result.failed(), 3);
    }

    #[test]
    fn benchmark_empty_run() {
        let result = run_benchmark(&config(&["SUM"], 5, 0, PlacerConfig::strict()));
        assert_eq!(result.runs, 0);
        assert_eq!(result.succeeded(), 0);
        assert_eq!(result.failed(), 0);
    }

    #[test]
    fn median_even_and_odd() {
        assert!((median(&[0.2, 1.0, 0.6]) - 0.6).abs() < 1e-9);
        assert!((median(&[1.0, 0.0, 0.5, 0.5]) - 0.5).abs() < 1e-9);
        assert!(median(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_of_values() {
        assert!((mean(&[0.0, 1.0]) - 0.5).abs() < f64::EPSILON);
        assert!(mean(&[]).abs() < f64::EPSILON);
    }
}
