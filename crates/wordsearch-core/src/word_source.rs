//! Dictionary filtering and random word sampling.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, WordSearchError};

/// Words that fit in a grid of a given size.
///
/// Raw entries are trimmed and uppercased; blank entries, entries with
/// anything other than ASCII letters, and entries longer than `max_len`
/// are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    max_len: usize,
    words: Vec<String>,
}

impl WordSource {
    /// Build a source from an in-memory list of raw words
    pub fn from_words<I, S>(max_len: usize, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = raw
            .into_iter()
            .filter_map(|w| normalize(w.as_ref(), max_len))
            .collect();
        Self { max_len, words }
    }

    /// Read one word per line
    pub fn from_reader<R: BufRead>(max_len: usize, reader: R) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            if let Some(word) = normalize(&line?, max_len) {
                words.push(word);
            }
        }
        log::debug!("loaded {} words of at most {} letters", words.len(), max_len);
        Ok(Self { max_len, words })
    }

    /// Read a dictionary file with one word per line
    pub fn load_from_path<P: AsRef<Path>>(max_len: usize, path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(max_len, BufReader::new(file))
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw one word uniformly at random, with replacement
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str> {
        self.words
            .choose(rng)
            .map(String::as_str)
            .ok_or(WordSearchError::EmptySource {
                max_len: self.max_len,
            })
    }
}

fn normalize(raw: &str, max_len: usize) -> Option<String> {
    let word = raw.trim().to_uppercase();
    let usable = !word.is_empty()
        && word.len() <= max_len
        && word.bytes().all(|b| b.is_ascii_uppercase());
    usable.then_some(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    #[test]
    fn test_filters_by_length_and_normalizes() {
        let source = WordSource::from_words(5, ["  cat ", "Horse", "elephant", "", "dog\r"]);
        assert_eq!(source.words(), &["CAT", "HORSE", "DOG"]);
        assert_eq!(source.max_len(), 5);
    }

    #[test]
    fn test_drops_non_letters() {
        let source = WordSource::from_words(10, ["don't", "x-ray", "café", "ok"]);
        assert_eq!(source.words(), &["OK"]);
    }

    #[test]
    fn test_from_reader_ignores_line_endings() {
        // A four-letter word plus its newline must still fit a size-4 grid
        let input = Cursor::new("wolf\nbear\r\nlynx\nmoose\n\n");
        let source = WordSource::from_reader(4, input).unwrap();
        assert_eq!(source.len(), 3);
        assert!(source.words().iter().all(|w| w.len() == 4));
    }

    #[test]
    fn test_load_missing_file() {
        let result = WordSource::load_from_path(10, "/definitely/not/here.txt");
        assert!(matches!(result, Err(WordSearchError::Io(_))));
    }

    #[test]
    fn test_sample_empty_source() {
        let source = WordSource::from_words(3, ["giraffe"]);
        assert!(source.is_empty());
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            source.sample(&mut rng),
            Err(WordSearchError::EmptySource { max_len: 3 })
        ));
    }

    #[test]
    fn test_sample_draws_from_source() {
        let source = WordSource::from_words(10, ["alpha", "beta", "gamma"]);
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let word = source.sample(&mut rng).unwrap();
            assert!(source.words().iter().any(|w| w == word));
            seen.insert(word.to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
