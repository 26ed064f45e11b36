//! Display functions for command results

use super::formatters::{accuracy_bar, render_grid, status_label};
use crate::commands::{BenchmarkResult, GenerateResult};
use crate::core::serialize_grid;
use crate::search::Evaluation;
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Print a generated puzzle
pub fn print_generate_result(result: &GenerateResult, show_placements: bool) {
    let grid = result.puzzle.grid();
    let (rows, cols) = grid.dimensions();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {} (seed {})",
        format!("{rows}x{cols}").bright_yellow().bold(),
        result.seed
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n{}", serialize_grid(grid));

    if show_placements {
        println!("\n📍 {}", "Placements:".bright_cyan().bold());
        for placement in result.puzzle.placements() {
            let (sr, sc) = placement.start;
            let (er, ec) = placement.end();
            println!(
                "   {:<12} ({sr}, {sc}) → ({er}, {ec})  {}",
                placement.word.text(),
                placement.direction.to_string().bright_black()
            );
        }
    }

    if !result.puzzle.is_complete() {
        println!("\n⚠️  {}", "Unplaced words:".yellow().bold());
        for word in result.puzzle.unplaced() {
            println!("   {}", word.text().yellow());
        }
    }

    print_accuracy_summary(&result.evaluation);
}

/// Print a checked puzzle with per-word status
pub fn print_evaluation(evaluation: &Evaluation, show_paths: bool) {
    let highlighted: FxHashSet<(usize, usize)> = evaluation
        .matches
        .iter()
        .flat_map(|(_, matches)| matches.iter().flat_map(|m| m.path.iter().copied()))
        .collect();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}\n", render_grid(&evaluation.grid, &highlighted));

    for (word, status) in &evaluation.report.statuses {
        println!("  {} {:<12} {}", status_label(*status), word, status);

        if show_paths && let Some(matches) = evaluation.matches.get(word) {
            for m in matches {
                let cells: Vec<String> = m.path.iter().map(|(r, c)| format!("({r}, {c})")).collect();
                println!(
                    "      {} {}",
                    m.direction.to_string().bright_black(),
                    cells.join(" ")
                );
            }
        }
    }

    print_accuracy_summary(evaluation);
}

fn print_accuracy_summary(evaluation: &Evaluation) {
    let report = &evaluation.report;

    println!("\n📊 {}", "Accuracy:".bright_cyan().bold());
    println!(
        "   [{}] {}",
        accuracy_bar(report.accuracy, 30).green(),
        format!("{:.1}%", report.accuracy * 100.0).bright_yellow().bold()
    );
    println!(
        "   {} unique, {} missing, {} ambiguous of {} words",
        report.unique.to_string().green(),
        report.missing.to_string().red(),
        report.ambiguous.to_string().yellow(),
        report.total()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Puzzles attempted: {}", result.runs);
    println!(
        "   Verified:          {}",
        result.succeeded().to_string().green()
    );
    if result.failed() > 0 {
        println!(
            "   Failed:            {}",
            result.failed().to_string().red()
        );
        for (kind, count) in &result.failures {
            println!("     {kind:<14} {count}");
        }
    }
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:    {:.1}", result.puzzles_per_second);

    if result.succeeded() == 0 {
        return;
    }

    println!("\n🎯 {}", "Accuracy:".bright_cyan().bold());
    println!(
        "   Mean:              {}",
        format!("{:.3}", result.mean_accuracy).bright_yellow().bold()
    );
    println!("   Median:            {:.3}", result.median_accuracy);
    println!(
        "   Perfect puzzles:   {} ({:.1}%)",
        result.perfect_puzzles,
        result.perfect_puzzles as f64 / result.succeeded() as f64 * 100.0
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let buckets = accuracy_buckets(&result.accuracies);
    for (i, &count) in buckets.iter().enumerate() {
        let pct = count as f64 / result.succeeded() as f64 * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        let label = if i == buckets.len() - 1 {
            "1.0    ".to_string()
        } else {
            format!("{:.1}-{:.1}", i as f64 / 10.0, (i + 1) as f64 / 10.0)
        };
        println!("   {label}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Counts per tenth of accuracy, with exactly 1.0 in its own last bucket
fn accuracy_buckets(accuracies: &[f64]) -> [usize; 11] {
    let mut buckets = [0; 11];
    for &a in accuracies {
        let index = ((a * 10.0).floor() as usize).min(10);
        buckets[index] += 1;
    }
    buckets
}
