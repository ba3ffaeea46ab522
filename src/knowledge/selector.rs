//! Move selection strategies.
//!
//! The engine decides *which* cells are candidates; a `MoveSelector` decides
//! which candidate to play:
//! - `FirstCell`: lexicographically smallest, fully deterministic
//! - `RandomCell`: uniform choice from a seeded stream

use crate::core::{Cell, MoveOrder, SweepRng};

/// Strategy for picking one move out of several candidates.
pub trait MoveSelector: Send {
    /// Pick one of `candidates`, which are sorted ascending.
    ///
    /// Returns `None` only when `candidates` is empty.
    fn select(&mut self, candidates: &[Cell]) -> Option<Cell>;
}

/// Always picks the smallest cell (row, then column).
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstCell;

impl MoveSelector for FirstCell {
    fn select(&mut self, candidates: &[Cell]) -> Option<Cell> {
        candidates.first().copied()
    }
}

/// Picks uniformly at random.
#[derive(Clone, Debug)]
pub struct RandomCell {
    rng: SweepRng,
}

impl RandomCell {
    /// Create a selector with its own seeded stream.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SweepRng::new(seed))
    }

    /// Create a selector drawing from an existing stream.
    pub fn from_rng(rng: SweepRng) -> Self {
        Self { rng }
    }
}

impl MoveSelector for RandomCell {
    fn select(&mut self, candidates: &[Cell]) -> Option<Cell> {
        self.rng.choose(candidates).copied()
    }
}

impl MoveOrder {
    /// Build the selector this order names. `rng` is only used by
    /// `MoveOrder::Random`.
    pub fn selector(self, rng: SweepRng) -> Box<dyn MoveSelector> {
        match self {
            MoveOrder::Lowest => Box::new(FirstCell),
            MoveOrder::Random => Box::new(RandomCell::from_rng(rng)),
        }
    }
}
