mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use wordsearch_core::{
    Generator, GeneratorConfig, Placement, Puzzle, WordSource, MAX_PLAYABLE_SIZE,
    MIN_PLAYABLE_SIZE,
};

/// Word search puzzle generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Width and height of the grid
    #[arg(
        short,
        long,
        default_value_t = 16,
        value_parser = clap::value_parser!(u16).range(MIN_PLAYABLE_SIZE as i64..=MAX_PLAYABLE_SIZE as i64)
    )]
    size: u16,

    /// Dictionary file with one word per line
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    dictionary: PathBuf,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Print the puzzle as JSON
    #[arg(long)]
    json: bool,

    /// Also print the answer key
    #[arg(long)]
    reveal: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// JSON shape handed to other front ends
#[derive(Serialize)]
struct PuzzleExport<'a> {
    size: usize,
    grid: Vec<String>,
    words: Vec<&'a str>,
    placements: &'a [Placement],
    abandoned: &'a [String],
}

impl<'a> PuzzleExport<'a> {
    fn new(puzzle: &'a Puzzle) -> Self {
        Self {
            size: puzzle.size(),
            grid: puzzle.grid().row_strings(),
            words: puzzle.added_words(),
            placements: puzzle.placements(),
            abandoned: puzzle.abandoned_words(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    let size = usize::from(cli.size);
    let source = WordSource::load_from_path(size, &cli.dictionary)
        .with_context(|| format!("loading dictionary {}", cli.dictionary.display()))?;
    log::debug!("{} usable words in {}", source.len(), cli.dictionary.display());

    let config = GeneratorConfig::with_size(size);
    let puzzle = match cli.seed {
        Some(seed) => Generator::with_seed(config, seed).generate(&source),
        None => Generator::with_config(config).generate(&source),
    }
    .context("generating puzzle")?;

    if puzzle.added_words().len() < puzzle.target_count() {
        log::warn!(
            "placed {} of {} words",
            puzzle.added_words().len(),
            puzzle.target_count()
        );
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&PuzzleExport::new(&puzzle))?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", render::render_puzzle(&puzzle));
    if cli.reveal {
        println!();
        print!("{}", render::render_answer_key(&puzzle));
    }
    Ok(())
}
