//! Error types for puzzle generation and solving.

use thiserror::Error;

/// Errors raised by grid construction, generation and solving.
///
/// Every error is terminal for the operation that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Grid size must be at least 1.
    #[error("grid size must be positive, got {0}")]
    InvalidSize(usize),
    /// A word is empty, contains a non-letter, or is longer than the grid.
    #[error("invalid word {word:?}: {reason}")]
    InvalidWordList { word: String, reason: String },
    /// No attempt managed to place every word.
    #[error("could not place all words within {max_tries} tries")]
    PlacementExhausted { max_tries: usize },
    /// A cell access fell outside the grid. Indicates a bug in the caller.
    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    /// The solver was handed a malformed grid or word list.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
