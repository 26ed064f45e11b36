//! Puzzle generation
//!
//! Builds a grid containing every requested word using randomized straight-line
//! placement with a per-word attempt budget.

mod config;
mod placer;

pub use config::{PlacementMode, PlacerConfig};
pub use placer::{Placer, Puzzle};
