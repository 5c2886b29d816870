use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;

use crate::error::{Result, WordSearchError};
use crate::{Direction, LetterGrid, Overlay, Placement, Position, Puzzle, WordSource};

/// Smallest grid size worth offering to a player
pub const MIN_PLAYABLE_SIZE: usize = 10;
/// Largest grid size that is still practical to render
pub const MAX_PLAYABLE_SIZE: usize = 55;

/// Number of words to attempt for a `size`x`size` grid: `floor((size/4)^(12/7))`.
///
/// Grows faster than linearly so larger grids get proportionally more words.
pub fn target_word_count(size: usize) -> usize {
    (size as f64 / 4.0).powf(12.0 / 7.0).floor() as usize
}

/// Configuration for puzzle generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Grid width and height
    pub size: usize,
    /// Tries per direct random placement attempt
    pub random_tries: usize,
    /// Tries per overlap placement attempt
    pub overlap_tries: usize,
    /// Passes over the pending words, as a multiple of the target word count
    pub pass_multiplier: usize,
    /// Chance of using overlap placement once at least one word is placed
    pub overlap_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 16,
            random_tries: 50,
            overlap_tries: 30,
            pass_multiplier: 4,
            overlap_probability: 0.3,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration for a grid of the given size
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn target_word_count(&self) -> usize {
        target_word_count(self.size)
    }

    /// Upper bound on passes over the pending words
    pub fn max_passes(&self) -> usize {
        self.pass_multiplier * self.target_word_count()
    }
}

/// Progress of one drawn word through the placement loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordState {
    Pending,
    Placed,
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Random,
    Overlap,
}

/// Word search puzzle generator
pub struct Generator<R: Rng = StdRng> {
    config: GeneratorConfig,
    rng: R,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    /// Create a generator drawing from the given random source
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a puzzle from the words in `source`.
    ///
    /// Placement is best-effort: words that cannot be placed within the
    /// retry budget are left out of the word bank and listed in
    /// [`Puzzle::abandoned_words`].
    pub fn generate(&mut self, source: &WordSource) -> Result<Puzzle> {
        let size = self.config.size;
        if size == 0 {
            return Err(WordSearchError::InvalidSize(size));
        }

        // A source built for a larger grid may hold words that cannot fit here
        let narrowed;
        let source = if source.max_len() > size {
            narrowed = WordSource::from_words(size, source.words());
            &narrowed
        } else {
            source
        };
        if source.is_empty() {
            return Err(WordSearchError::EmptySource { max_len: size });
        }

        let target = self.config.target_word_count();
        let mut drawn = Vec::with_capacity(target);
        for _ in 0..target {
            drawn.push(source.sample(&mut self.rng)?.to_string());
        }
        // Longer words have fewer legal slots, so place them while the grid is empty
        drawn.sort_by_key(|word| Reverse(word.len()));

        let mut board = Board::new(LetterGrid::random(size, &mut self.rng));
        let mut slots: Vec<(String, WordState)> =
            drawn.into_iter().map(|w| (w, WordState::Pending)).collect();

        let max_passes = self.config.max_passes();
        let mut passes = 0;
        while passes < max_passes && slots.iter().any(|(_, s)| *s == WordState::Pending) {
            for (word, state) in slots.iter_mut() {
                if *state != WordState::Pending {
                    continue;
                }
                if self.attempt(&mut board, word) {
                    *state = WordState::Placed;
                }
            }
            passes += 1;
            log::debug!(
                "pass {}/{}: {} of {} words placed",
                passes,
                max_passes,
                board.placements.len(),
                slots.len()
            );
        }

        let mut abandoned = Vec::new();
        for (word, state) in slots.iter_mut() {
            if *state == WordState::Pending {
                *state = WordState::Abandoned;
                log::debug!("abandoned {} after {} passes", word, passes);
                abandoned.push(word.clone());
            }
        }

        let puzzle = board.into_puzzle(abandoned, target);
        log::info!(
            "generated {}x{} puzzle: {}/{} words placed, {} overlapping letters",
            size,
            size,
            puzzle.placements().len(),
            target,
            puzzle.overlap_count()
        );
        Ok(puzzle)
    }

    /// Make one placement attempt for `word` with a randomly chosen strategy
    fn attempt(&mut self, board: &mut Board, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        match self.choose_strategy(board) {
            Strategy::Random => self.place_random(board, word, &letters),
            Strategy::Overlap => self.place_overlapping(board, word, &letters),
        }
    }

    fn choose_strategy(&mut self, board: &Board) -> Strategy {
        if board.placements.is_empty() {
            return Strategy::Random;
        }
        let p = self.config.overlap_probability;
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        if self.rng.gen_bool(p) {
            Strategy::Overlap
        } else {
            Strategy::Random
        }
    }

    /// Drop the word at a random start and direction chosen so it fits the grid
    fn place_random(&mut self, board: &mut Board, word: &str, letters: &[char]) -> bool {
        for _ in 0..self.config.random_tries {
            let direction = Direction::random(&mut self.rng);
            let Some((rows, cols)) = direction.start_ranges(letters.len(), board.size()) else {
                continue;
            };
            let row = self.rng.gen_range(rows) as isize;
            let col = self.rng.gen_range(cols) as isize;

            if let Some(cells) = board.validate(letters, direction, row, col) {
                board.place(word, letters, direction, cells);
                return true;
            }
        }
        false
    }

    /// Anchor one of the word's letters on a matching letter of an already placed word
    fn place_overlapping(&mut self, board: &mut Board, word: &str, letters: &[char]) -> bool {
        for _ in 0..self.config.overlap_tries {
            let index = self.rng.gen_range(0..letters.len());
            let anchors = board.overlay.positions_of(letters[index]);
            let Some(&anchor) = anchors.choose(&mut self.rng) else {
                continue;
            };

            let direction = Direction::random(&mut self.rng);
            let (dr, dc) = direction.delta();
            let row = anchor.row as isize - index as isize * dr;
            let col = anchor.col as isize - index as isize * dc;

            if let Some(cells) = board.validate(letters, direction, row, col) {
                board.place(word, letters, direction, cells);
                return true;
            }
        }
        false
    }
}

/// Grid, overlay and placement records under construction
pub(crate) struct Board {
    grid: LetterGrid,
    overlay: Overlay,
    placements: Vec<Placement>,
}

impl Board {
    pub(crate) fn new(grid: LetterGrid) -> Self {
        let overlay = Overlay::empty(grid.size());
        Self {
            grid,
            overlay,
            placements: Vec::new(),
        }
    }

    fn size(&self) -> usize {
        self.grid.size()
    }

    /// Cells the word would occupy, if it fits in bounds and every occupied
    /// cell it crosses already holds the same letter
    pub(crate) fn validate(
        &self,
        letters: &[char],
        direction: Direction,
        row: isize,
        col: isize,
    ) -> Option<Vec<Position>> {
        let cells = direction.path(row, col, letters.len(), self.size())?;
        let fits = cells
            .iter()
            .zip(letters)
            .all(|(&pos, &letter)| self.overlay.get(pos).map_or(true, |held| held == letter));
        fits.then_some(cells)
    }

    /// Write a validated placement into both grids
    pub(crate) fn place(
        &mut self,
        word: &str,
        letters: &[char],
        direction: Direction,
        cells: Vec<Position>,
    ) {
        for (&pos, &letter) in cells.iter().zip(letters) {
            self.grid.set(pos, letter);
            self.overlay.set(pos, letter);
        }
        self.placements.push(Placement {
            word: word.to_string(),
            direction,
            cells,
        });
    }

    /// Validate and place in one step
    #[cfg(test)]
    pub(crate) fn try_place(&mut self, word: &str, direction: Direction, row: isize, col: isize) -> bool {
        let letters: Vec<char> = word.chars().collect();
        match self.validate(&letters, direction, row, col) {
            Some(cells) => {
                self.place(word, &letters, direction, cells);
                true
            }
            None => false,
        }
    }

    pub(crate) fn into_puzzle(self, abandoned: Vec<String>, target_count: usize) -> Puzzle {
        Puzzle {
            grid: self.grid,
            overlay: self.overlay,
            placements: self.placements,
            abandoned,
            target_count,
        }
    }
}
