//! Square letter grid shared by the generator and the solver.
//!
//! Cells are stored in a flat row-major vector. Each cell is either
//! unassigned (`None`) or holds one uppercase letter.

use std::fmt;
use std::mem;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A `(row, col)` position in the grid.
pub type Cell = (usize, usize);

/// Character used to render an unassigned cell.
const EMPTY_CELL: char = '.';

/// An N x N matrix of optional uppercase letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates a grid with every cell unassigned.
    ///
    /// Fails with `InvalidSize` for zero, or for a size whose cell count
    /// cannot be allocated.
    pub fn new(size: usize) -> Result<Self> {
        let max_cells = isize::MAX as usize / mem::size_of::<Option<char>>();
        let cell_count = size
            .checked_mul(size)
            .filter(|&count| count > 0 && count <= max_cells)
            .ok_or(Error::InvalidSize(size))?;

        Ok(Self {
            size,
            cells: vec![None; cell_count],
        })
    }

    /// Builds a grid from explicit rows, uppercasing every letter.
    ///
    /// Fails with `InvalidInput` if the rows do not form a square or a cell
    /// holds something other than an ASCII letter.
    pub fn from_rows(rows: Vec<Vec<Option<char>>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::InvalidInput("grid has no rows".to_string()));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::InvalidInput(format!(
                    "row {row_index} has {} cells, expected {size}",
                    row.len()
                )));
            }
            for cell in row {
                match cell {
                    Some(letter) if !letter.is_ascii_alphabetic() => {
                        return Err(Error::InvalidInput(format!(
                            "row {row_index} contains non-letter {letter:?}"
                        )));
                    }
                    _ => cells.push(cell.map(|letter| letter.to_ascii_uppercase())),
                }
            }
        }

        Ok(Self { size, cells })
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size || col >= self.size {
            return Err(Error::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// Letter at `(row, col)`, or `None` if the cell is unassigned.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<Option<char>> {
        let index = self.index(row, col)?;
        Ok(self.cells[index])
    }

    /// Stores `letter` (uppercased) at `(row, col)`.
    ///
    /// Fails with `InvalidInput` if `letter` is not an ASCII letter.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, letter: char) -> Result<()> {
        let index = self.index(row, col)?;
        if !letter.is_ascii_alphabetic() {
            return Err(Error::InvalidInput(format!(
                "({row}, {col}) cannot hold non-letter {letter:?}"
            )));
        }
        self.cells[index] = Some(letter.to_ascii_uppercase());
        Ok(())
    }

    /// True iff no cell is unassigned.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Resets every cell to unassigned.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Assigns a letter from `next_letter` to every unassigned cell, in row-major order.
    ///
    /// Assigned cells are left untouched, so this is a no-op on a complete grid.
    /// `next_letter` must only yield ASCII letters.
    pub(crate) fn fill_with(&mut self, mut next_letter: impl FnMut() -> char) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_none()) {
            let letter = next_letter();
            debug_assert!(letter.is_ascii_alphabetic(), "fill letter {letter:?}");
            *cell = Some(letter.to_ascii_uppercase());
        }
    }

    /// All cells in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.cells.iter().copied()
    }

    /// The grid as rows of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> + '_ {
        self.cells.chunks(self.size)
    }
}

/// Renders rows of space-separated letters, `.` for unassigned cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.unwrap_or(EMPTY_CELL))?;
            }
        }
        Ok(())
    }
}

/// Parses the rendering produced by `Display`.
///
/// Blank lines are ignored; letters may be lowercase.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| {
                        let mut chars = token.chars();
                        match (chars.next(), chars.next()) {
                            (Some(EMPTY_CELL), None) => Ok(None),
                            (Some(letter), None) => Ok(Some(letter)),
                            _ => Err(Error::InvalidInput(format!(
                                "expected a single letter, got {token:?}"
                            ))),
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Grid::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(Grid::new(0), Err(Error::InvalidSize(0)));
    }

    #[test]
    fn test_new_rejects_size_with_overflowing_cell_count() {
        let huge = usize::MAX / 2 + 3;
        assert_eq!(Grid::new(huge), Err(Error::InvalidSize(huge)));
        let wide = u32::MAX as usize;
        assert_eq!(Grid::new(wide), Err(Error::InvalidSize(wide)));
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.size(), 3);
        assert!(grid.letters().all(|cell| cell.is_none()));
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_get_and_set_are_bounds_checked() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(2, 1, 'q').unwrap();
        assert_eq!(grid.get(2, 1), Ok(Some('Q')));
        assert_eq!(
            grid.get(3, 0),
            Err(Error::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
        assert!(matches!(
            grid.set(0, 3, 'A'),
            Err(Error::OutOfBounds { col: 3, .. })
        ));
    }

    #[test]
    fn test_set_rejects_non_letters() {
        let mut grid = Grid::new(2).unwrap();
        assert!(matches!(grid.set(0, 0, '1'), Err(Error::InvalidInput(_))));
        assert!(matches!(grid.set(0, 1, 'é'), Err(Error::InvalidInput(_))));
        assert!(matches!(grid.set(1, 0, '.'), Err(Error::InvalidInput(_))));
        assert_eq!(grid, Grid::new(2).unwrap());

        grid.set(1, 1, 'z').unwrap();
        assert_eq!(grid.to_string().parse::<Grid>(), Ok(grid));
    }

    #[test]
    fn test_clear_resets_every_cell() {
        let mut grid = Grid::new(2).unwrap();
        grid.fill_with(|| 'Z');
        assert!(grid.is_complete());
        grid.clear();
        assert_eq!(grid, Grid::new(2).unwrap());
    }

    #[test]
    fn test_fill_with_only_touches_unassigned_cells() {
        let mut grid = Grid::new(2).unwrap();
        grid.set(0, 0, 'A').unwrap();
        let mut calls = 0;
        grid.fill_with(|| {
            calls += 1;
            'B'
        });
        assert_eq!(calls, 3);
        assert_eq!(grid.get(0, 0), Ok(Some('A')));

        let snapshot = grid.clone();
        grid.fill_with(|| 'C');
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_display_renders_rows() {
        let mut grid = Grid::new(3).unwrap();
        for (col, letter) in "CAT".chars().enumerate() {
            grid.set(0, col, letter).unwrap();
        }
        grid.set(1, 1, 'O').unwrap();
        for (col, letter) in "DOG".chars().enumerate() {
            grid.set(2, col, letter).unwrap();
        }

        insta::assert_snapshot!(grid.to_string(), @r"
        C A T
        . O .
        D O G
        ");
    }

    #[test]
    fn test_parse_accepts_display_output() {
        let grid: Grid = "c a t\n. O .\n\nD O G\n".parse().unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.get(0, 0), Ok(Some('C')));
        assert_eq!(grid.get(1, 0), Ok(None));
        assert_eq!(grid.to_string().parse::<Grid>(), Ok(grid));
    }

    #[test]
    fn test_parse_rejects_non_square_rows() {
        assert!(matches!(
            "A B\nC".parse::<Grid>(),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            "A B C\nD E F".parse::<Grid>(),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!("".parse::<Grid>(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_parse_rejects_non_letters() {
        assert!(matches!(
            "A 1\nB C".parse::<Grid>(),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            "AB C\nD E".parse::<Grid>(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rows_are_row_major() {
        let grid: Grid = "A B\nC D".parse().unwrap();
        let rows: Vec<Vec<Option<char>>> = grid.rows().map(<[_]>::to_vec).collect();
        assert_eq!(
            rows,
            vec![vec![Some('A'), Some('B')], vec![Some('C'), Some('D')]]
        );
    }
}
