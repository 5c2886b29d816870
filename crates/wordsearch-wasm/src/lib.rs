//! WebAssembly bindings for the word search engine
//!
//! Generation and selection checking happen here; drawing the grid and
//! tracking clicks is left to the JavaScript side.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wordsearch_core::{Game, Generator, GeneratorConfig, Position, WordSource};


// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Snapshot handed to JavaScript
#[derive(Serialize)]
struct GameSnapshot<'a> {
    size: usize,
    grid: Vec<String>,
    remaining: Vec<&'a str>,
    found: Vec<&'a str>,
    found_cells: Vec<Position>,
    complete: bool,
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct WordSearchGame {
    game: Game,
}

#[wasm_bindgen]
impl WordSearchGame {
    /// Generate a new puzzle from newline-separated dictionary text
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize, dictionary: &str, seed: Option<u64>) -> Result<WordSearchGame, JsValue> {
        Self::generate(size, dictionary, seed).map_err(|e| JsValue::from_str(&e))
    }

    /// Grid width and height
    #[wasm_bindgen]
    pub fn size(&self) -> usize {
        self.game.puzzle().size()
    }

    /// Grid rows as strings, top to bottom
    #[wasm_bindgen]
    pub fn grid_rows(&self) -> Result<JsValue, JsValue> {
        to_js(&self.game.puzzle().grid().row_strings())
    }

    /// Words still to find
    #[wasm_bindgen]
    pub fn remaining_words(&self) -> Result<JsValue, JsValue> {
        to_js(&self.game.remaining_words())
    }

    /// Words found so far, in the order they were found
    #[wasm_bindgen]
    pub fn found_words(&self) -> Result<JsValue, JsValue> {
        to_js(&self.game.found_words())
    }

    /// Check a selection given as an array of `[row, col]` pairs.
    ///
    /// Returns the matched word, or `undefined` if the selection is not
    /// exactly the cells of a word still in the bank.
    #[wasm_bindgen]
    pub fn check_selection(&mut self, cells: JsValue) -> Result<Option<String>, JsValue> {
        let cells: Vec<(usize, usize)> = serde_wasm_bindgen::from_value(cells)?;
        Ok(self.check_cells(&cells))
    }

    /// Check if every word has been found
    #[wasm_bindgen]
    pub fn is_complete(&self) -> bool {
        self.game.is_complete()
    }

    /// Get current game state as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_default()
    }
}

impl WordSearchGame {
    fn generate(size: usize, dictionary: &str, seed: Option<u64>) -> Result<Self, String> {
        let source = WordSource::from_words(size, dictionary.lines());
        let config = GeneratorConfig::with_size(size);
        let puzzle = match seed {
            Some(seed) => Generator::with_seed(config, seed).generate(&source),
            None => Generator::with_config(config).generate(&source),
        }
        .map_err(|e| e.to_string())?;

        log::info!(
            "new {}x{} word search with {} words",
            size,
            size,
            puzzle.placements().len()
        );
        Ok(Self {
            game: Game::new(puzzle),
        })
    }

    fn check_cells(&mut self, cells: &[(usize, usize)]) -> Option<String> {
        let selection: Vec<Position> = cells.iter().map(|&c| Position::from(c)).collect();
        self.game.check_selection(&selection).map(str::to_string)
    }

    fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            size: self.game.puzzle().size(),
            grid: self.game.puzzle().grid().row_strings(),
            remaining: self.game.remaining_words(),
            found: self.game.found_words(),
            found_cells: self.game.found_cells(),
            complete: self.game.is_complete(),
        }
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}
