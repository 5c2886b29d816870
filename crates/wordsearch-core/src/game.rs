use serde::Serialize;

use crate::{Position, Puzzle};

/// A player's progress through a puzzle.
///
/// Owns the mutable word bank; the puzzle itself is never modified.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    /// The generated puzzle
    puzzle: Puzzle,
    /// Whether each placement has been found, indexed like `puzzle.placements()`
    found: Vec<bool>,
    /// Placement indices in the order they were found
    found_order: Vec<usize>,
}

impl Game {
    pub fn new(puzzle: Puzzle) -> Self {
        let found = vec![false; puzzle.placements().len()];
        Self {
            puzzle,
            found,
            found_order: Vec::new(),
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Check a selection against the words still in the bank.
    ///
    /// A word matches when the selected cells are exactly its cells, in any
    /// order. The matched word leaves the bank, so repeating the same
    /// selection afterwards returns `None`. A duplicate draw stacked on the
    /// exact same cells leaves the bank with it.
    pub fn check_selection(&mut self, selection: &[Position]) -> Option<&str> {
        let matched: Vec<usize> = self
            .puzzle
            .placements()
            .iter()
            .enumerate()
            .filter(|(i, p)| !self.found[*i] && p.matches(selection))
            .map(|(i, _)| i)
            .collect();
        let &first = matched.first()?;

        for &index in &matched {
            self.found[index] = true;
            self.found_order.push(index);
        }
        Some(self.puzzle.placements()[first].word.as_str())
    }

    /// Words still to be found, in placement order
    pub fn remaining_words(&self) -> Vec<&str> {
        self.puzzle
            .placements()
            .iter()
            .zip(&self.found)
            .filter(|(_, found)| !**found)
            .map(|(p, _)| p.word.as_str())
            .collect()
    }

    /// Words found so far, in the order they were found
    pub fn found_words(&self) -> Vec<&str> {
        self.found_order
            .iter()
            .map(|&i| self.puzzle.placements()[i].word.as_str())
            .collect()
    }

    /// Cells belonging to found words
    pub fn found_cells(&self) -> Vec<Position> {
        self.found_order
            .iter()
            .flat_map(|&i| self.puzzle.placements()[i].cells.iter().copied())
            .collect()
    }

    pub fn found_count(&self) -> usize {
        self.found_order.len()
    }

    /// Check if every placed word has been found
    pub fn is_complete(&self) -> bool {
        self.found.iter().all(|&f| f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Board;
    use crate::{Direction, LetterGrid};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn puzzle_with(words: &[(&str, Direction, isize, isize)]) -> Puzzle {
        let mut rng = StdRng::seed_from_u64(8);
        let mut board = Board::new(LetterGrid::random(6, &mut rng));
        for &(word, direction, row, col) in words {
            assert!(board.try_place(word, direction, row, col), "could not place {}", word);
        }
        board.into_puzzle(Vec::new(), words.len())
    }

    fn cells(coords: &[(usize, usize)]) -> Vec<Position> {
        coords.iter().map(|&c| Position::from(c)).collect()
    }

    #[test]
    fn test_selection_matches_in_any_order() {
        let mut game = Game::new(puzzle_with(&[("CAT", Direction::East, 0, 0)]));
        assert_eq!(game.check_selection(&cells(&[(0, 2), (0, 0), (0, 1)])), Some("CAT"));
    }

    #[test]
    fn test_incomplete_selection_does_not_match() {
        let mut game = Game::new(puzzle_with(&[("CAT", Direction::East, 0, 0)]));
        assert_eq!(game.check_selection(&cells(&[(0, 0), (0, 1)])), None);
        assert_eq!(game.remaining_words(), vec!["CAT"]);
    }

    #[test]
    fn test_found_word_leaves_bank() {
        let mut game = Game::new(puzzle_with(&[("CAT", Direction::East, 0, 0)]));
        let selection = cells(&[(0, 0), (0, 1), (0, 2)]);

        assert_eq!(game.check_selection(&selection), Some("CAT"));
        assert!(game.remaining_words().is_empty());
        assert_eq!(game.check_selection(&selection), None);
        assert_eq!(game.found_words(), vec!["CAT"]);
        assert!(game.is_complete());
    }

    #[test]
    fn test_progress_tracking() {
        let mut game = Game::new(puzzle_with(&[
            ("CAT", Direction::East, 0, 0),
            ("ART", Direction::South, 0, 1),
        ]));
        assert_eq!(game.remaining_words(), vec!["CAT", "ART"]);
        assert!(!game.is_complete());

        assert_eq!(game.check_selection(&cells(&[(2, 1), (1, 1), (0, 1)])), Some("ART"));
        assert_eq!(game.remaining_words(), vec!["CAT"]);
        assert_eq!(game.found_count(), 1);
        assert_eq!(game.found_cells(), cells(&[(0, 1), (1, 1), (2, 1)]));
        // The puzzle's own word bank is untouched
        assert_eq!(game.puzzle().added_words(), vec!["CAT", "ART"]);
    }

    #[test]
    fn test_duplicate_words_found_separately() {
        let mut game = Game::new(puzzle_with(&[
            ("DOG", Direction::East, 3, 0),
            ("DOG", Direction::South, 3, 5),
        ]));
        assert_eq!(game.check_selection(&cells(&[(3, 5), (4, 5), (5, 5)])), Some("DOG"));
        assert_eq!(game.remaining_words(), vec!["DOG"]);
        assert_eq!(game.check_selection(&cells(&[(3, 0), (3, 1), (3, 2)])), Some("DOG"));
        assert!(game.is_complete());
    }

    #[test]
    fn test_stacked_duplicates_found_together() {
        let mut game = Game::new(puzzle_with(&[
            ("EMU", Direction::South, 1, 2),
            ("CAT", Direction::East, 0, 0),
            ("EMU", Direction::South, 1, 2),
        ]));
        let selection = cells(&[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(game.check_selection(&selection), Some("EMU"));
        assert_eq!(game.check_selection(&selection), None);
        assert_eq!(game.remaining_words(), vec!["CAT"]);
        assert_eq!(game.found_words(), vec!["EMU", "EMU"]);
    }

    #[test]
    fn test_empty_puzzle_is_complete() {
        let game = Game::new(puzzle_with(&[]));
        assert!(game.is_complete());
        assert!(game.remaining_words().is_empty());
    }
}
