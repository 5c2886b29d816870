use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::Position;

/// One of the eight compass directions a word can run in.
///
/// Rows grow downward and columns grow to the right, so `North` steps toward
/// row 0 and `East` steps toward higher columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (row, column) step vector for this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Pick a direction uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Range of start rows and start columns from which a word of `len`
    /// letters stays inside a `size`x`size` grid.
    ///
    /// Returns `None` when the word is longer than the grid.
    pub fn start_ranges(
        self,
        len: usize,
        size: usize,
    ) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
        let (dr, dc) = self.delta();
        Some((axis_range(dr, len, size)?, axis_range(dc, len, size)?))
    }

    /// Cells covered by a `len`-letter word starting at `(row, col)`,
    /// or `None` if the start or any later cell falls outside the grid.
    pub fn path(self, row: isize, col: isize, len: usize, size: usize) -> Option<Vec<Position>> {
        let (dr, dc) = self.delta();
        let mut cells = Vec::with_capacity(len);
        for i in 0..len as isize {
            cells.push(Position::checked(row + i * dr, col + i * dc, size)?);
        }
        Some(cells)
    }
}

/// Valid start indices along one axis for a step of `delta`.
fn axis_range(delta: isize, len: usize, size: usize) -> Option<RangeInclusive<usize>> {
    if len == 0 || len > size {
        return None;
    }
    let span = len - 1;
    Some(match delta {
        -1 => span..=size - 1,
        1 => 0..=size - 1 - span,
        _ => 0..=size - 1,
    })
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_deltas_are_distinct_unit_steps() {
        let mut seen = std::collections::HashSet::new();
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
            assert_ne!((dr, dc), (0, 0));
            assert!(seen.insert((dr, dc)), "duplicate delta for {}", dir);
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_start_ranges_backward_axes() {
        // Word running up and to the left must start at least len-1 from the top/left edges
        let (rows, cols) = Direction::NorthWest.start_ranges(4, 10).unwrap();
        assert_eq!(rows, 3..=9);
        assert_eq!(cols, 3..=9);
    }

    #[test]
    fn test_start_ranges_forward_and_fixed_axes() {
        let (rows, cols) = Direction::East.start_ranges(4, 10).unwrap();
        assert_eq!(rows, 0..=9);
        assert_eq!(cols, 0..=6);

        let (rows, cols) = Direction::South.start_ranges(10, 10).unwrap();
        assert_eq!(rows, 0..=0);
        assert_eq!(cols, 0..=9);
    }

    #[test]
    fn test_start_ranges_word_too_long() {
        assert!(Direction::East.start_ranges(11, 10).is_none());
        assert!(Direction::East.start_ranges(0, 10).is_none());
    }

    #[test]
    fn test_every_start_in_range_fits() {
        let size = 7;
        for dir in Direction::ALL {
            for len in 1..=size {
                let (rows, cols) = dir.start_ranges(len, size).unwrap();
                for row in rows.clone() {
                    for col in cols.clone() {
                        let path = dir.path(row as isize, col as isize, len, size);
                        assert!(path.is_some(), "{} len {} at ({}, {})", dir, len, row, col);
                    }
                }
            }
        }
    }

    #[test]
    fn test_path_out_of_bounds() {
        assert!(Direction::West.path(0, 1, 3, 5).is_none());
        assert!(Direction::North.path(-1, 0, 1, 5).is_none());
        assert!(Direction::SouthEast.path(3, 3, 3, 5).is_none());
    }

    #[test]
    fn test_path_order() {
        let path = Direction::SouthWest.path(0, 2, 3, 3).unwrap();
        assert_eq!(
            path,
            vec![Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_random_covers_all_directions() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Direction::random(&mut rng));
        }
        assert_eq!(seen.len(), 8);
    }
}
