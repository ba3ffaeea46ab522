//! Game records: moves, outcomes and end-of-game reports.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, GameConfig};
use crate::knowledge::InferenceStats;

/// Why a move was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// The cell was proven safe.
    Safe,
    /// No safe cell was known; the cell was a guess.
    Blind,
}

/// A single move in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Cell probed.
    pub cell: Cell,

    /// Safe or blind.
    pub kind: MoveKind,

    /// Revealed neighbor count. `None` if the move hit a hazard.
    pub count: Option<usize>,
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Every non-hazard cell was probed.
    Cleared,
    /// A blind move hit a hazard.
    Detonated { cell: Cell },
    /// No safe move was known and blind moves are disabled.
    NoSafeMove,
    /// The configured move limit was reached.
    MoveLimit,
}

impl GameOutcome {
    /// Check whether the game was won.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        matches!(self, GameOutcome::Cleared)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Cleared => write!(f, "cleared"),
            GameOutcome::Detonated { cell } => write!(f, "detonated at {}", cell),
            GameOutcome::NoSafeMove => write!(f, "no safe move"),
            GameOutcome::MoveLimit => write!(f, "move limit reached"),
        }
    }
}

/// Summary of a finished game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameReport {
    /// Configuration the game was played with.
    pub config: GameConfig,

    pub outcome: GameOutcome,

    /// Every move, in order.
    pub moves: Vec<MoveRecord>,

    /// Moves backed by a safety proof.
    pub safe_moves: usize,

    /// Guesses.
    pub blind_moves: usize,

    /// Hazards the engine proved.
    pub hazards_confirmed: usize,

    /// Whether every hazard ended up flagged.
    pub won: bool,

    /// Engine statistics at the end of the game.
    pub stats: InferenceStats,
}

impl GameReport {
    /// Total moves played.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}
