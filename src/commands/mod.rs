//! Command implementations

pub mod benchmark;
pub mod check;
pub mod generate;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use check::{CheckConfig, check_puzzle};
pub use generate::{GenerateConfig, GenerateResult, generate_puzzle};
