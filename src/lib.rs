//! Word Search Engine
//!
//! Deterministic word-search generation and exhaustive verification: place
//! words on a grid with a seeded random source, find every straight-line
//! occurrence of each word in any grid, and score how many appear exactly once.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordsearch_engine::generator::{Placer, PlacerConfig};
//! use wordsearch_engine::search::{find_words, score_accuracy};
//!
//! let words = ["SUM", "AREA", "PRIME"];
//! let placer = Placer::new(PlacerConfig::strict());
//! let puzzle = placer.generate(&words, 6, 6, &mut StdRng::seed_from_u64(1)).unwrap();
//!
//! let matches = find_words(puzzle.grid(), &words);
//! let accuracy = score_accuracy(&matches);
//! assert!((0.0..=1.0).contains(&accuracy));
//! ```

// Core domain types
pub mod core;

// Puzzle generation
pub mod generator;

// Puzzle verification and scoring
pub mod search;

// Word and puzzle sources
pub mod sources;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
