use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell position in the puzzle grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert signed coordinates, rejecting anything outside a `size`x`size` grid
    pub fn checked(row: isize, col: isize, size: usize) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// The letter matrix shown to the player.
///
/// Every cell always holds an uppercase ASCII letter: cells start as random
/// filler and are overwritten by placed words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<char>,
}

impl LetterGrid {
    /// Fill a `size`x`size` grid with uniformly random letters A-Z
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let cells = (0..size * size)
            .map(|_| char::from(b'A' + rng.gen_range(0..26u8)))
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> char {
        self.cells[pos.row * self.size + pos.col]
    }

    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        self.cells[pos.row * self.size + pos.col] = letter;
    }

    /// Iterate rows as slices of letters
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Each row as a string, top to bottom
    pub fn row_strings(&self) -> Vec<String> {
        self.rows().map(|row| row.iter().collect()).collect()
    }

    /// Read the letters along a path
    pub fn read(&self, path: &[Position]) -> String {
        path.iter().map(|&pos| self.get(pos)).collect()
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Tracks which cells are occupied by placed words.
///
/// Kept apart from [`LetterGrid`] because the grid's random filler letters
/// must not count as occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Overlay {
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[pos.row * self.size + pos.col]
    }

    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        self.cells[pos.row * self.size + pos.col] = Some(letter);
    }

    /// All occupied cells holding `letter`, in row-major order
    pub fn positions_of(&self, letter: char) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Some(letter))
            .map(|(idx, _)| Position::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.map_or_else(|| ".".to_string(), |c| c.to_string()))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
