//! Randomized word-search generation.
//!
//! Words are placed one at a time in list order. Each word samples candidate
//! start cells without replacement and commits to a random clear
//! (direction, reversed) option at the first cell that has one. If any word
//! cannot be placed, the whole attempt is discarded and the grid is cleared
//! before the next attempt. Once every word is in, the remaining cells are
//! filled with random letters.

use std::mem;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::geometry::{Direction, DIRECTIONS};
use crate::grid::{Cell, Grid};
use crate::placement::Placement;
use crate::words;

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Number of whole-list attempts before giving up.
    pub max_tries: usize,
    /// Seed for reproducible puzzles; `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 12,
            max_tries: 5,
            seed: None,
        }
    }
}

/// A finished puzzle: a complete grid and where each word was hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub solution: Vec<Placement>,
}

impl Puzzle {
    /// The hidden words, in placement order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.solution.iter().map(|placement| placement.word.as_str())
    }
}

/// Builds a puzzle for one word list.
pub struct Generator {
    words: Vec<String>,
    max_tries: usize,
    grid: Grid,
    solution: Vec<Placement>,
    rng: StdRng,
}

impl Generator {
    /// Validates the word list against the configured size.
    ///
    /// Words are uppercased. Fails with `InvalidSize` for a zero size and
    /// `InvalidWordList` for empty, non-letter, or oversized words.
    pub fn new<S: AsRef<str>>(words: &[S], config: &GeneratorConfig) -> Result<Self> {
        let grid = Grid::new(config.size)?;
        let words = words::normalize(words, config.size)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            words,
            max_tries: config.max_tries,
            grid,
            solution: Vec::new(),
            rng,
        })
    }

    /// The grid in its current state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placements committed so far.
    pub fn solution(&self) -> &[Placement] {
        &self.solution
    }

    /// Places every word, fills the gaps, and hands back the finished puzzle.
    pub fn generate(mut self) -> Result<Puzzle> {
        self.place_all(self.max_tries)?;
        self.random_fill();
        info!(
            "generated {size}x{size} puzzle with {} words",
            self.solution.len(),
            size = self.grid.size()
        );

        Ok(Puzzle {
            grid: self.grid,
            solution: self.solution,
        })
    }

    /// Places all words, retrying from an empty grid up to `max_tries` times.
    ///
    /// Returns the 1-based attempt that succeeded. On failure the grid and
    /// solution are left empty.
    pub fn place_all(&mut self, max_tries: usize) -> Result<usize> {
        for attempt in 1..=max_tries {
            self.reset();
            if self.try_place_all_words()? {
                debug!("placed {} words on attempt {attempt}", self.words.len());
                return Ok(attempt);
            }
            debug!("attempt {attempt}/{max_tries} failed, starting over");
        }

        self.reset();
        Err(Error::PlacementExhausted { max_tries })
    }

    /// Gives every unassigned cell a uniformly random letter A-Z.
    pub fn random_fill(&mut self) {
        let rng = &mut self.rng;
        self.grid.fill_with(|| char::from(b'A' + rng.gen_range(0..26u8)));
    }

    fn reset(&mut self) {
        self.grid.clear();
        self.solution.clear();
    }

    /// One attempt over the whole list; stops at the first word that does not fit.
    fn try_place_all_words(&mut self) -> Result<bool> {
        let words = mem::take(&mut self.words);
        let mut placed = Ok(true);
        for word in &words {
            placed = self.try_place_word(word);
            if !matches!(placed, Ok(true)) {
                break;
            }
        }
        self.words = words;
        placed
    }

    fn try_place_word(&mut self, word: &str) -> Result<bool> {
        let letters: Vec<char> = word.chars().collect();
        let mut candidates = candidate_cells(self.grid.size(), letters.len());
        candidates.shuffle(&mut self.rng);

        for start in candidates {
            let options = self.clear_options(start, &letters)?;
            let Some(&(direction, reversed)) = options.choose(&mut self.rng) else {
                trace!("{word}: nothing clear from {start:?}");
                continue;
            };

            self.commit(&letters, start, direction, reversed)?;
            debug!("{word}: placed at {start:?} heading {direction}, reversed: {reversed}");
            self.solution.push(Placement {
                word: word.to_string(),
                start,
                direction,
                reversed,
            });
            return Ok(true);
        }

        debug!("{word}: no candidate cell left");
        Ok(false)
    }

    /// Every (direction, reversed) pair that fits at `start` and agrees with
    /// letters already in the grid.
    fn clear_options(&self, start: Cell, letters: &[char]) -> Result<Vec<(Direction, bool)>> {
        let size = self.grid.size();
        let mut options = Vec::new();

        for direction in fitting_directions(start, letters.len(), size) {
            let Some(path) = direction.path(start, letters.len(), size) else {
                continue;
            };
            if self.is_clear(&path, letters.iter())? {
                options.push((direction, false));
            }
            if self.is_clear(&path, letters.iter().rev())? {
                options.push((direction, true));
            }
        }

        Ok(options)
    }

    fn is_clear<'a>(
        &self,
        path: &[Cell],
        letters: impl Iterator<Item = &'a char>,
    ) -> Result<bool> {
        for (&(row, col), &letter) in path.iter().zip(letters) {
            match self.grid.get(row, col)? {
                Some(existing) if existing != letter => return Ok(false),
                _ => {}
            }
        }
        Ok(true)
    }

    /// Writes the word along `direction`, leaving already-matching cells as they are.
    fn commit(
        &mut self,
        letters: &[char],
        start: Cell,
        direction: Direction,
        reversed: bool,
    ) -> Result<()> {
        let size = self.grid.size();
        let path = direction
            .path(start, letters.len(), size)
            .ok_or(Error::OutOfBounds {
                row: start.0,
                col: start.1,
                size,
            })?;

        let ordered: Vec<char> = if reversed {
            letters.iter().rev().copied().collect()
        } else {
            letters.to_vec()
        };

        for (&(row, col), letter) in path.iter().zip(ordered) {
            if self.grid.get(row, col)?.is_none() {
                self.grid.set(row, col, letter)?;
            }
        }
        Ok(())
    }
}

/// Start cells for a word of length `len`, in row-major order.
///
/// Excludes the bottom-right "unfit zone": cells with both row and column at
/// or beyond `size - len + 1`.
fn candidate_cells(size: usize, len: usize) -> Vec<Cell> {
    let unfit_zone = (size + 1).saturating_sub(len);
    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .filter(|&(row, col)| !(row >= unfit_zone && col >= unfit_zone))
        .collect()
}

/// Directions along which `len` cells from `start` all stay on the grid.
///
/// A one-letter word covers a single cell whichever way it runs, so it gets
/// just the first direction.
fn fitting_directions(start: Cell, len: usize, size: usize) -> Vec<Direction> {
    if len == 1 {
        return vec![DIRECTIONS[0]];
    }
    DIRECTIONS
        .into_iter()
        .filter(|direction| direction.fits(start, len, size))
        .collect()
}
