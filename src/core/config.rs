//! Game configuration types.
//!
//! A game is configured once at startup:
//! - Grid dimensions and hazard count (what the board looks like)
//! - Seed (which board, and which blind moves)
//! - Move policy (how ties among candidate moves are broken, whether blind
//!   moves are allowed at all, and an optional move limit)
//!
//! The inference engine only consumes the grid dimensions and expected
//! hazard count; everything else is read by the board and the session.

use serde::{Deserialize, Serialize};

use super::GridDims;
use crate::error::{Error, Result};

/// How a move is picked when several candidates are available.
///
/// Also parsed directly as a command-line value (`lowest`, `random`).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum MoveOrder {
    /// Lexicographically smallest cell (row, then column).
    #[default]
    Lowest,
    /// Uniformly random, driven by the seeded move stream.
    Random,
}

impl std::fmt::Display for MoveOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOrder::Lowest => write!(f, "lowest"),
            MoveOrder::Random => write!(f, "random"),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows.
    pub height: usize,

    /// Number of columns.
    pub width: usize,

    /// Number of hazards hidden on the board.
    pub hazards: usize,

    /// Random seed for hazard placement and random move selection.
    /// Same seed produces the same game.
    pub seed: u64,

    /// Tie-break rule among candidate moves.
    pub move_order: MoveOrder,

    /// Whether the session may guess when no safe move is known.
    /// When false the session stops with `GameOutcome::NoSafeMove`.
    pub allow_blind_moves: bool,

    /// Maximum moves per game (`None` = until the game ends).
    pub max_moves: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 8,
            width: 8,
            hazards: 8,
            seed: 42,
            move_order: MoveOrder::Lowest,
            allow_blind_moves: true,
            max_moves: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `height x width` grid with `hazards` hazards.
    ///
    /// Other settings use their defaults.
    pub fn new(height: usize, width: usize, hazards: usize) -> Self {
        Self {
            height,
            width,
            hazards,
            ..Self::default()
        }
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the move tie-break rule.
    #[must_use]
    pub fn with_move_order(mut self, order: MoveOrder) -> Self {
        self.move_order = order;
        self
    }

    /// Allow or forbid blind moves.
    #[must_use]
    pub fn with_blind_moves(mut self, allow: bool) -> Self {
        self.allow_blind_moves = allow;
        self
    }

    /// Set the maximum number of moves per game.
    #[must_use]
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = Some(max);
        self
    }

    /// Grid dimensions.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.height, self.width)
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(Error::EmptyGrid {
                height: self.height,
                width: self.width,
            });
        }
        let cells = self.dims().checked_cell_count().ok_or_else(|| Error::InvalidConfiguration {
            message: format!("{}x{} grid has too many cells", self.height, self.width),
        })?;
        if self.hazards > cells {
            return Err(Error::TooManyHazards {
                hazards: self.hazards,
                height: self.height,
                width: self.width,
            });
        }
        if self.max_moves == Some(0) {
            return Err(Error::InvalidConfiguration {
                message: "max_moves must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
