//! Compass directions and bounds-checked walking on a square grid.
//!
//! Rows grow downward and columns grow rightward, so `North` is a step to
//! the previous row and `East` a step to the next column.

use std::fmt;

use crate::grid::Cell;

/// One of the eight unit steps a word can run along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
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

/// All eight directions in their fixed enumeration order.
///
/// Both the generator (fitting directions) and the solver (first match wins)
/// iterate this table, so the order determines tie-breaks.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// Row and column change for a single step.
    pub const fn delta(self) -> (isize, isize) {
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

    /// Short compass name (`N`, `NE`, ...).
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }

    /// The cell reached after `steps` steps from `start`.
    ///
    /// Returns `None` if that cell lies outside a `size`x`size` grid.
    #[inline]
    pub fn offset(self, (row, col): Cell, steps: usize, size: usize) -> Option<Cell> {
        let (row_step, col_step) = self.delta();
        let steps = isize::try_from(steps).ok()?;
        let row = row.checked_add_signed(row_step * steps)?;
        let col = col.checked_add_signed(col_step * steps)?;
        (row < size && col < size).then_some((row, col))
    }

    /// Whether a run of `len` cells starting at `start` stays inside the grid.
    #[inline]
    pub fn fits(self, start: Cell, len: usize, size: usize) -> bool {
        match len {
            0 => false,
            _ => self.offset(start, len - 1, size).is_some(),
        }
    }

    /// The `len` cells visited from `start`, or `None` if any step leaves the grid.
    pub fn path(self, start: Cell, len: usize, size: usize) -> Option<Vec<Cell>> {
        (0..len)
            .map(|steps| self.offset(start, steps, size))
            .collect()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_are_distinct_unit_steps() {
        let mut seen = Vec::new();
        for direction in DIRECTIONS {
            let (dr, dc) = direction.delta();
            assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
            assert_ne!((dr, dc), (0, 0), "{direction} has a zero delta");
            assert!(!seen.contains(&(dr, dc)), "{direction} repeats a delta");
            seen.push((dr, dc));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_offset_rejects_steps_off_the_grid() {
        assert_eq!(Direction::North.offset((0, 0), 1, 5), None);
        assert_eq!(Direction::West.offset((2, 0), 1, 5), None);
        assert_eq!(Direction::East.offset((2, 4), 1, 5), None);
        assert_eq!(Direction::SouthEast.offset((0, 0), 4, 5), Some((4, 4)));
        assert_eq!(Direction::SouthEast.offset((0, 0), 5, 5), None);
        assert_eq!(Direction::NorthEast.offset((4, 0), 4, 5), Some((0, 4)));
    }

    #[test]
    fn test_zero_steps_stays_put() {
        for direction in DIRECTIONS {
            assert_eq!(direction.offset((3, 3), 0, 4), Some((3, 3)));
            assert!(direction.fits((0, 0), 1, 1));
            assert_eq!(direction.path((0, 0), 1, 1), Some(vec![(0, 0)]));
        }
    }

    #[test]
    fn test_full_length_run_fits_only_from_matching_edge() {
        // length == size: East must start in column 0, South in row 0
        assert!(Direction::East.fits((2, 0), 4, 4));
        assert!(!Direction::East.fits((2, 1), 4, 4));
        assert!(Direction::South.fits((0, 3), 4, 4));
        assert!(!Direction::South.fits((1, 3), 4, 4));
        assert!(Direction::NorthWest.fits((3, 3), 4, 4));
        assert!(!Direction::NorthWest.fits((3, 2), 4, 4));
    }

    #[test]
    fn test_path_lists_every_cell() {
        assert_eq!(
            Direction::SouthWest.path((0, 2), 3, 3),
            Some(vec![(0, 2), (1, 1), (2, 0)])
        );
        assert_eq!(Direction::SouthWest.path((0, 1), 3, 3), None);
    }
}
