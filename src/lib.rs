//! Word Search Library
//!
//! Generates square letter-grid word-search puzzles and solves them.
//!
//! The [`Generator`] hides each word along one of eight compass directions
//! (optionally reversed), retrying the whole list from an empty grid when a
//! word does not fit, then fills the gaps with random letters. [`solve`]
//! recovers where each word sits by scanning every cell in every direction.

pub mod error;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod placement;
pub mod solver;
mod words;

pub use error::{Error, Result};
pub use generator::{Generator, GeneratorConfig, Puzzle};
pub use geometry::{Direction, DIRECTIONS};
pub use grid::{Cell, Grid};
pub use placement::{Match, Placement};
pub use solver::solve;
