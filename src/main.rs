//! Word Search Engine - CLI
//!
//! Generate word-search puzzles, check grids from any source, and benchmark
//! the generator.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use wordsearch_engine::{
    commands::{
        BenchmarkConfig, CheckConfig, GenerateConfig, check_puzzle, generate_puzzle,
        run_benchmark,
    },
    core::Word,
    generator::{PlacementMode, PlacerConfig},
    logging::init_logger,
    output::{print_benchmark_result, print_evaluation, print_generate_result},
    sources::{EmbeddedWordSource, FileWordSource, WordSource, normalize_words},
};

#[derive(Parser)]
#[command(
    name = "wordsearch",
    about = "Word-search puzzle generator and checker",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log placement and scan details
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Where the word list comes from
#[derive(clap::Args)]
struct WordArgs {
    /// Comma-separated words (overrides --topic and --word-file)
    #[arg(short = 'w', long, value_delimiter = ',')]
    words: Vec<String>,

    /// File with one word per line
    #[arg(long)]
    word_file: Option<PathBuf>,

    /// Built-in topic list: math, animals, space
    #[arg(short, long, default_value = "math")]
    topic: String,

    /// Number of words to take from the topic or file
    #[arg(short = 'n', long, default_value = "5")]
    count: usize,
}

/// Grid size and placer settings
#[derive(clap::Args)]
struct PlacerArgs {
    /// Grid rows
    #[arg(short, long, default_value = "7")]
    rows: usize,

    /// Grid columns
    #[arg(short, long, default_value = "7")]
    cols: usize,

    /// Attempts per word before giving up
    #[arg(long, default_value_t = PlacerConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Leave out words that cannot be placed instead of failing
    #[arg(long)]
    best_effort: bool,

    /// Characters used to fill empty cells
    #[arg(long, default_value = wordsearch_engine::core::DEFAULT_ALPHABET)]
    alphabet: String,
}

impl PlacerArgs {
    fn placer_config(&self) -> PlacerConfig {
        let mode = if self.best_effort {
            PlacementMode::BestEffort
        } else {
            PlacementMode::Strict
        };
        PlacerConfig::new(mode)
            .with_max_attempts(self.max_attempts)
            .with_alphabet(&self.alphabet)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a puzzle
    Generate {
        #[command(flatten)]
        words: WordArgs,

        #[command(flatten)]
        placer: PlacerArgs,

        /// Random seed; the same seed always gives the same puzzle
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Print where each word was placed
        #[arg(short, long)]
        placements: bool,
    },

    /// Check grid text against a word list
    Check {
        /// Grid file ('-' or omitted reads stdin)
        #[arg(short, long)]
        grid: Option<PathBuf>,

        /// Comma-separated words to look for
        #[arg(short = 'w', long, value_delimiter = ',', required = true)]
        words: Vec<String>,

        /// Expected rows (requires --cols)
        #[arg(short, long, requires = "cols")]
        rows: Option<usize>,

        /// Expected columns (requires --rows)
        #[arg(short, long, requires = "rows")]
        cols: Option<usize>,

        /// Print the cells of every match
        #[arg(short, long)]
        paths: bool,
    },

    /// Generate and verify many puzzles
    Benchmark {
        #[command(flatten)]
        words: WordArgs,

        #[command(flatten)]
        placer: PlacerArgs,

        /// Number of puzzles
        #[arg(long, default_value = "100")]
        runs: usize,

        /// Seed of the first puzzle; later puzzles use the following seeds
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Generate {
            words,
            placer,
            seed,
            placements,
        } => run_generate_command(&words, &placer, seed, placements),
        Commands::Check {
            grid,
            words,
            rows,
            cols,
            paths,
        } => run_check_command(grid, words, rows.zip(cols), paths),
        Commands::Benchmark {
            words,
            placer,
            runs,
            seed,
        } => run_benchmark_command(&words, &placer, runs, seed),
    }
}

/// Resolve the word list from flags
///
/// Explicit words win, then a word file, then the built-in topic list. Words
/// that cannot fit `min(rows, cols)` are rejected here rather than by the
/// placer, except in best-effort mode where the placer reports them.
fn load_words(args: &WordArgs, placer: &PlacerArgs) -> Result<Vec<Word>> {
    let max_len = placer.rows.min(placer.cols);

    let raw = if !args.words.is_empty() {
        args.words.clone()
    } else if let Some(path) = &args.word_file {
        FileWordSource::new(path)
            .pick_words(&args.topic, args.count, max_len)
            .with_context(|| format!("reading {}", path.display()))?
    } else {
        EmbeddedWordSource.pick_words(&args.topic, args.count, max_len)?
    };

    if raw.is_empty() {
        bail!("no words to place");
    }

    let limit = if placer.best_effort { usize::MAX } else { max_len };
    Ok(normalize_words(&raw, limit)?)
}

fn run_generate_command(
    words: &WordArgs,
    placer: &PlacerArgs,
    seed: u64,
    show_placements: bool,
) -> Result<()> {
    let words = load_words(words, placer)?;
    let config =
        GenerateConfig::new(words, placer.rows, placer.cols, placer.placer_config()).with_seed(seed);

    let result = generate_puzzle(config)?;
    print_generate_result(&result, show_placements);
    Ok(())
}

fn run_check_command(
    grid: Option<PathBuf>,
    words: Vec<String>,
    expected_size: Option<(usize, usize)>,
    show_paths: bool,
) -> Result<()> {
    let text = match grid {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading grid from stdin")?;
            text
        }
    };

    let config = CheckConfig {
        text,
        words,
        expected_size,
    };
    let evaluation = check_puzzle(&config)?;
    print_evaluation(&evaluation, show_paths);
    Ok(())
}

fn run_benchmark_command(
    words: &WordArgs,
    placer: &PlacerArgs,
    runs: usize,
    seed: u64,
) -> Result<()> {
    let words = load_words(words, placer)?;

    println!(
        "Running benchmark on {runs} puzzles ({}x{}, {} words)...",
        placer.rows,
        placer.cols,
        words.len()
    );

    let config = BenchmarkConfig {
        words,
        rows: placer.rows,
        cols: placer.cols,
        runs,
        first_seed: seed,
        placer: placer.placer_config(),
        show_progress: true,
    };

    let result = run_benchmark(&config);
    print_benchmark_result(&result);
    Ok(())
}
