//! Puzzle verification
//!
//! Searches any grid, self-built or not, for straight-line word occurrences and
//! scores how many words appear exactly once.

mod evaluate;
mod scanner;
mod scoring;
mod validation;

pub use evaluate::{Evaluation, evaluate_grid, evaluate_puzzle};
pub use scanner::{Match, MatchSet, find_word, find_words};
pub use scoring::{AccuracyReport, WordStatus, classify, score_accuracy};
pub use validation::check_size;
