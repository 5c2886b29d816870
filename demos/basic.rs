//! Basic example of using the word search engine

use wordsearch_core::{Game, Generator, GeneratorConfig, WordSource};

fn main() {
    let words = [
        "rust", "cargo", "crate", "borrow", "lifetime", "trait", "module", "macro", "closure",
        "iterator", "slice", "vector", "option", "result", "match",
    ];
    let source = WordSource::from_words(16, words);

    // Generate a puzzle
    println!("Generating a 16x16 puzzle...\n");
    let mut generator = Generator::with_config(GeneratorConfig::with_size(16));
    let puzzle = match generator.generate(&source) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!("Generated puzzle:");
    println!("{}", puzzle.grid());

    // Show some stats
    println!("Words placed: {}/{}", puzzle.added_words().len(), puzzle.target_count());
    println!("Overlapping letters: {}", puzzle.overlap_count());
    if !puzzle.abandoned_words().is_empty() {
        println!("Could not place: {}", puzzle.abandoned_words().join(", "));
    }

    println!("\nAnswer key:");
    println!("{}", puzzle.overlay());
    for placement in puzzle.placements() {
        if let Some(start) = placement.start() {
            println!(
                "{:<10} {:>2} from ({}, {})",
                placement.word, placement.direction, start.row, start.col
            );
        }
    }

    // Play it back by selecting each word's cells
    println!("\n--- Checking selections ---\n");
    let mut game = Game::new(puzzle.clone());
    for placement in puzzle.placements() {
        let mut selection = placement.cells.clone();
        selection.reverse();
        if let Some(word) = game.check_selection(&selection) {
            println!("Found {}", word);
        }
    }
    println!("Complete: {}", game.is_complete());
}
