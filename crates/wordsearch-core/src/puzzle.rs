use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::{Direction, LetterGrid, Overlay, Position};

/// Where a single word was written into the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The placed word
    pub word: String,
    /// Direction the word reads in
    pub direction: Direction,
    /// Cells occupied, first letter to last
    pub cells: Vec<Position>,
}

impl Placement {
    /// Whether `selection` covers exactly this word's cells, in any order
    pub fn matches(&self, selection: &[Position]) -> bool {
        let wanted: BTreeSet<Position> = self.cells.iter().copied().collect();
        let selected: BTreeSet<Position> = selection.iter().copied().collect();
        wanted == selected
    }

    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }
}

/// A finished word search.
///
/// Produced once by [`crate::Generator::generate`] and never mutated
/// afterwards; per-player progress lives in [`crate::Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub(crate) grid: LetterGrid,
    pub(crate) overlay: Overlay,
    pub(crate) placements: Vec<Placement>,
    pub(crate) abandoned: Vec<String>,
    pub(crate) target_count: usize,
}

impl Puzzle {
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The letters shown to the player
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Cells occupied by placed words
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Placement records in the order words were placed
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The word bank: every successfully placed word, in placement order
    pub fn added_words(&self) -> Vec<&str> {
        self.placements.iter().map(|p| p.word.as_str()).collect()
    }

    /// Word to ordered coordinate path, one entry per placed word
    pub fn word_locations(&self) -> impl Iterator<Item = (&str, &[Position])> {
        self.placements
            .iter()
            .map(|p| (p.word.as_str(), p.cells.as_slice()))
    }

    /// Path of the first placement of `word`
    pub fn location_of(&self, word: &str) -> Option<&[Position]> {
        self.placements
            .iter()
            .find(|p| p.word == word)
            .map(|p| p.cells.as_slice())
    }

    /// Drawn words that never found a slot before the retry budget ran out
    pub fn abandoned_words(&self) -> &[String] {
        &self.abandoned
    }

    /// Number of words the generator set out to place
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Number of letters that landed on a cell an earlier word already claimed
    pub fn overlap_count(&self) -> usize {
        let total: usize = self.placements.iter().map(|p| p.cells.len()).sum();
        total - self.overlay.occupied_count()
    }
}
