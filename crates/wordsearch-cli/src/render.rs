use std::fmt::Write;
use wordsearch_core::Puzzle;

/// Words per line in the word bank
const BANK_COLUMNS: usize = 4;

/// The letter grid followed by the word bank
pub fn render_puzzle(puzzle: &Puzzle) -> String {
    let mut out = String::new();
    out.push_str(&puzzle.grid().to_string());
    out.push('\n');

    let words = puzzle.added_words();
    let _ = writeln!(out, "Find these {} words:", words.len());
    out.push_str(&render_word_bank(&words));
    out
}

/// Lay words out in fixed-width columns
pub fn render_word_bank(words: &[&str]) -> String {
    let width = words.iter().map(|w| w.len()).max().unwrap_or(0) + 2;
    let mut out = String::new();
    for chunk in words.chunks(BANK_COLUMNS) {
        let line: String = chunk.iter().map(|w| format!("{:<width$}", w, width = width)).collect();
        let _ = writeln!(out, "  {}", line.trim_end());
    }
    out
}

/// Overlay of placed letters plus each word's start, end and direction
pub fn render_answer_key(puzzle: &Puzzle) -> String {
    let mut out = String::new();
    out.push_str("Answer key:\n");
    out.push_str(&puzzle.overlay().to_string());
    out.push('\n');

    let width = puzzle
        .placements()
        .iter()
        .map(|p| p.word.len())
        .max()
        .unwrap_or(0);
    for placement in puzzle.placements() {
        if let (Some(start), Some(end)) = (placement.cells.first(), placement.cells.last()) {
            let _ = writeln!(
                out,
                "  {:<width$}  {:>2}  ({}, {}) -> ({}, {})",
                placement.word,
                placement.direction,
                start.row,
                start.col,
                end.row,
                end.col,
                width = width
            );
        }
    }
    if !puzzle.abandoned_words().is_empty() {
        let _ = writeln!(out, "Not placed: {}", puzzle.abandoned_words().join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordsearch_core::{Generator, GeneratorConfig, WordSource};

    #[test]
    fn test_word_bank_columns() {
        let bank = render_word_bank(&["CAT", "HORSE", "DOG", "EMU", "OWL"]);
        let lines: Vec<&str> = bank.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  CAT    HORSE  DOG    EMU");
        assert_eq!(lines[1], "  OWL");
    }

    #[test]
    fn test_empty_word_bank() {
        assert_eq!(render_word_bank(&[]), "");
    }

    #[test]
    fn test_render_puzzle_lists_every_word() {
        let source = WordSource::from_words(10, ["heron", "egret", "stork", "crane"]);
        let puzzle = Generator::with_seed(GeneratorConfig::with_size(10), 1)
            .generate(&source)
            .unwrap();
        let text = render_puzzle(&puzzle);
        assert_eq!(text.lines().take_while(|l| !l.is_empty()).count(), 10);
        for word in puzzle.added_words() {
            assert!(text.contains(word));
        }

        let key = render_answer_key(&puzzle);
        assert!(key.starts_with("Answer key:\n"));
        assert_eq!(key.lines().filter(|l| l.contains("->")).count(), puzzle.placements().len());
    }
}
