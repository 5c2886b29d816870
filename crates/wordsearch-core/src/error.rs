//! Error types for puzzle generation.

use std::io;

/// Errors reported to the caller of the word search engine.
///
/// Running out of placement retries is not an error: words that never find a
/// slot are reported through [`crate::Puzzle::abandoned_words`] instead.
#[derive(Debug, thiserror::Error)]
pub enum WordSearchError {
    /// The word source has no usable words for the requested grid size
    #[error("word source has no words of at most {max_len} letters")]
    EmptySource { max_len: usize },

    /// The grid size is not usable (zero)
    #[error("invalid grid size: {0}")]
    InvalidSize(usize),

    /// Reading the dictionary failed
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, WordSearchError>;
