//! # minefield-kb
//!
//! A knowledge-based inference engine for minesweeper-style grid deduction.
//!
//! An agent probes cells and learns, for each probe, how many of the
//! neighboring cells hide a hazard. From those counts alone it proves which
//! unrevealed cells are safe and which are hazards, without guessing.
//!
//! ## Design Principles
//!
//! 1. **One ingestion point**: knowledge only enters through
//!    `KnowledgeEngine::record_observation`, which runs inference to a
//!    fixpoint before returning.
//!
//! 2. **Facts are folded out**: once a cell is proven, it is removed from
//!    every constraint. No retained constraint ever mentions a settled cell.
//!
//! 3. **Deterministic by default**: sorted cell sets, insertion-ordered
//!    constraints, lexicographic tie-breaks and seeded ChaCha streams make
//!    every game reproducible.
//!
//! ## Modules
//!
//! - `core`: Cells, grid geometry, RNG, configuration
//! - `knowledge`: Constraints, the knowledge engine, move selectors
//! - `board`: Ground-truth board simulator
//! - `game`: Autoplay sessions and batch runs
//!
//! ## Example
//!
//! ```
//! use minefield_kb::core::{Cell, GridDims};
//! use minefield_kb::knowledge::KnowledgeEngine;
//!
//! let mut engine = KnowledgeEngine::new(GridDims::new(5, 5), 3);
//! engine.record_observation(Cell::new(2, 2), 0).unwrap();
//!
//! assert_eq!(engine.confirmed_safe().len(), 9);
//! assert_eq!(engine.choose_safe_move(), Some(Cell::new(1, 1)));
//! ```

pub mod core;
pub mod error;
pub mod knowledge;
pub mod board;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Cell, GridDims, GameConfig, MoveOrder, SweepRng};

pub use crate::error::{Error, Result};

pub use crate::knowledge::{
    Constraint, Fact, KnowledgeEngine, InferenceStats,
    MoveSelector, FirstCell, RandomCell,
};

pub use crate::board::Minefield;

pub use crate::game::{
    GameSession, GameReport, GameOutcome, MoveKind, MoveRecord,
    run_batch, BatchSummary,
};
