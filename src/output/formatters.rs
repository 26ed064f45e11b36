//! Formatting utilities for terminal output

use crate::core::{EMPTY_CELL, Grid};
use crate::search::WordStatus;
use colored::{ColoredString, Colorize};
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an accuracy in `[0, 1]` as a bar
#[must_use]
pub fn accuracy_bar(accuracy: f64, width: usize) -> String {
    create_progress_bar(accuracy, 1.0, width)
}

/// Render a grid in its text format, highlighting `cells`
#[must_use]
pub fn render_grid<S: BuildHasher>(
    grid: &Grid,
    cells: &HashSet<(usize, usize), S>,
) -> String {
    let mut lines = Vec::with_capacity(grid.rows());

    for (r, row) in grid.row_cells().enumerate() {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                let text = cell.unwrap_or(EMPTY_CELL).to_string();
                if cells.contains(&(r, c)) {
                    text.bright_green().bold().to_string()
                } else {
                    text.bright_black().to_string()
                }
            })
            .collect();
        lines.push(line.join(" "));
    }

    lines.join("\n")
}

/// Colored one-word label for a word status
#[must_use]
pub fn status_label(status: WordStatus) -> ColoredString {
    match status {
        WordStatus::Unique => "✓".green().bold(),
        WordStatus::Missing => "✗".red().bold(),
        WordStatus::Ambiguous(_) => "≠".yellow().bold(),
    }
}
