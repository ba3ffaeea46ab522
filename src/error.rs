//! Error types for the minefield crate.

use thiserror::Error;

use crate::core::Cell;

/// Main error type for the minefield crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("grid dimensions must be non-zero, got {height}x{width}")]
    EmptyGrid { height: usize, width: usize },

    #[error("cannot place {hazards} hazards on a {height}x{width} grid")]
    TooManyHazards {
        hazards: usize,
        height: usize,
        width: usize,
    },

    #[error("cell {cell} is outside the {height}x{width} grid")]
    OutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },

    #[error("count {count} at {cell} exceeds its {neighbors} neighbors")]
    CountExceedsNeighbors {
        cell: Cell,
        count: usize,
        neighbors: usize,
    },

    #[error("cell {cell} is already confirmed as a hazard and cannot be observed")]
    ProbedHazard { cell: Cell },

    #[error("count {count} at {cell} contradicts known facts: {reason}")]
    Contradiction {
        cell: Cell,
        count: usize,
        reason: String,
    },

    #[error("game already over")]
    GameOver,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
