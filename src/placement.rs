//! Records of where words sit in a grid.
//!
//! A [`Placement`] is the generator's ground truth; a [`Match`] is what the
//! solver finds. Both can read their letters back off a grid.

use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::Direction;
use crate::grid::{Cell, Grid};

/// A word committed to the grid by the generator.
///
/// When `reversed` is set, the word's letters run from its last letter at
/// `start` back to its first letter along `direction`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub start: Cell,
    pub direction: Direction,
    pub reversed: bool,
}

impl Placement {
    /// Cells covered by the word, starting at `start`.
    pub fn cells(&self, size: usize) -> Result<Vec<Cell>> {
        let len = self.word.len();
        self.direction
            .path(self.start, len, size)
            .ok_or(Error::OutOfBounds {
                row: self.start.0,
                col: self.start.1,
                size,
            })
    }

    /// Reads the word back off `grid`, undoing the reversal.
    ///
    /// Unassigned cells read as `.`.
    pub fn read(&self, grid: &Grid) -> Result<String> {
        let mut letters = read_cells(grid, &self.cells(grid.size())?)?;
        if self.reversed {
            letters = letters.chars().rev().collect();
        }
        Ok(letters)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dr, dc) = self.direction.delta();
        write!(
            f,
            "{}: ({}, {}) -> ({dr}, {dc}), reversed: {}",
            self.word, self.start.0, self.start.1, self.reversed
        )
    }
}

/// An occurrence of a word found by the solver.
///
/// One-letter words have no direction; they occupy only `start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub word: String,
    pub start: Cell,
    pub direction: Option<Direction>,
}

impl Match {
    /// Per-step change, `(0, 0)` for a one-letter word.
    pub fn delta(&self) -> (isize, isize) {
        self.direction.map_or((0, 0), Direction::delta)
    }

    /// Cells covered by the occurrence.
    pub fn cells(&self, size: usize) -> Result<Vec<Cell>> {
        let out_of_bounds = Error::OutOfBounds {
            row: self.start.0,
            col: self.start.1,
            size,
        };
        match self.direction {
            Some(direction) => direction
                .path(self.start, self.word.len(), size)
                .ok_or(out_of_bounds),
            None if self.start.0 < size && self.start.1 < size => Ok(vec![self.start]),
            None => Err(out_of_bounds),
        }
    }

    /// Reads the occurrence back off `grid`.
    pub fn read(&self, grid: &Grid) -> Result<String> {
        read_cells(grid, &self.cells(grid.size())?)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dr, dc) = self.delta();
        write!(
            f,
            "{}: ({}, {}) -> ({dr}, {dc})",
            self.word, self.start.0, self.start.1
        )
    }
}

fn read_cells(grid: &Grid, cells: &[Cell]) -> Result<String> {
    cells
        .iter()
        .map(|&(row, col)| -> Result<char> { Ok(grid.get(row, col)?.unwrap_or('.')) })
        .collect()
}
