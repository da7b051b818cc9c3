//! Brute-force word-search solver.
//!
//! Scans every cell in row-major order. For each word whose first letter
//! sits in that cell, tries the eight directions in table order and records
//! the first one that spells the whole word. Every matching cell is
//! reported, so a word hidden twice yields two matches.

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::geometry::{Direction, DIRECTIONS};
use crate::grid::{Cell, Grid};
use crate::placement::Match;
use crate::words;

/// Finds every occurrence of each word in `grid`.
///
/// Words are uppercased before searching. Fails with `InvalidInput` if a
/// word is empty, contains a non-letter, or is longer than the grid.
/// Unassigned cells never match.
pub fn solve<S: AsRef<str>>(grid: &Grid, words: &[S]) -> Result<Vec<Match>> {
    let size = grid.size();
    let words =
        words::normalize(words, size).map_err(|err| Error::InvalidInput(err.to_string()))?;
    let letters: Vec<Vec<char>> = words.iter().map(|word| word.chars().collect()).collect();

    // word indices keyed by first letter, kept in list order
    let mut by_first_letter: FxHashMap<char, Vec<usize>> = FxHashMap::default();
    for (index, word) in letters.iter().enumerate() {
        by_first_letter.entry(word[0]).or_default().push(index);
    }

    let mut matches = Vec::new();
    for row in 0..size {
        for col in 0..size {
            let Some(letter) = grid.get(row, col)? else {
                continue;
            };
            let Some(indices) = by_first_letter.get(&letter) else {
                continue;
            };

            for &index in indices {
                let word = &letters[index];
                let direction = if word.len() == 1 {
                    None
                } else {
                    match first_matching_direction(grid, (row, col), word)? {
                        Some(direction) => Some(direction),
                        None => continue,
                    }
                };

                debug!("{}: found at ({row}, {col})", words[index]);
                matches.push(Match {
                    word: words[index].clone(),
                    start: (row, col),
                    direction,
                });
            }
        }
    }

    info!("found {} matches for {} words", matches.len(), words.len());
    Ok(matches)
}

fn first_matching_direction(
    grid: &Grid,
    start: Cell,
    letters: &[char],
) -> Result<Option<Direction>> {
    for direction in DIRECTIONS {
        if spells_along(grid, start, direction, letters)? {
            return Ok(Some(direction));
        }
    }
    Ok(None)
}

/// Checks letters after the first, stopping at the first step off the grid or mismatch.
fn spells_along(
    grid: &Grid,
    start: Cell,
    direction: Direction,
    letters: &[char],
) -> Result<bool> {
    for (steps, &letter) in letters.iter().enumerate().skip(1) {
        let Some((row, col)) = direction.offset(start, steps, grid.size()) else {
            return Ok(false);
        };
        if grid.get(row, col)? != Some(letter) {
            return Ok(false);
        }
    }
    Ok(true)
}
