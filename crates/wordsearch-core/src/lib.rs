//! Word search puzzle engine.
//!
//! Draws words from a [`WordSource`], hides them in a square letter grid along
//! the eight compass directions, and records where each one landed so a
//! front end can check a player's selection with [`Game::check_selection`].
//!
//! ```
//! use wordsearch_core::{Game, Generator, GeneratorConfig, WordSource};
//!
//! let source = WordSource::from_words(12, ["otter", "badger", "lynx", "moose"]);
//! let mut generator = Generator::with_seed(GeneratorConfig::with_size(12), 7);
//! let puzzle = generator.generate(&source).unwrap();
//!
//! let mut game = Game::new(puzzle.clone());
//! let first = &puzzle.placements()[0];
//! assert_eq!(game.check_selection(&first.cells), Some(first.word.as_str()));
//! ```

mod direction;
pub mod error;
mod game;
mod generator;
mod grid;
mod puzzle;
mod word_source;

pub use direction::Direction;
pub use error::{Result, WordSearchError};
pub use game::Game;
pub use generator::{
    target_word_count, Generator, GeneratorConfig, MAX_PLAYABLE_SIZE, MIN_PLAYABLE_SIZE,
};
pub use grid::{LetterGrid, Overlay, Position};
pub use puzzle::{Placement, Puzzle};
pub use word_source::WordSource;
