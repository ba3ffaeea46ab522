//! Batch runs: many games from one configuration.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameConfig, SweepRng};
use crate::error::Result;

use super::report::{GameOutcome, GameReport};
use super::session::GameSession;

/// Aggregate results over a batch of games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    pub cleared: usize,
    pub detonated: usize,
    pub no_safe_move: usize,
    pub move_limit: usize,

    /// Moves across all games.
    pub total_moves: usize,

    /// Guesses across all games.
    pub blind_moves: usize,
}

impl BatchSummary {
    /// Fold one finished game into the summary.
    pub fn record(&mut self, report: &GameReport) {
        self.games += 1;
        match report.outcome {
            GameOutcome::Cleared => self.cleared += 1,
            GameOutcome::Detonated { .. } => self.detonated += 1,
            GameOutcome::NoSafeMove => self.no_safe_move += 1,
            GameOutcome::MoveLimit => self.move_limit += 1,
        }
        self.total_moves += report.move_count();
        self.blind_moves += report.blind_moves;
    }

    /// Fraction of games cleared.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.cleared as f64 / self.games as f64
        }
    }

    /// Average moves per game.
    #[must_use]
    pub fn average_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }
}

/// Play `games` games, each on its own board.
///
/// Game seeds are forked from `config.seed`, so the whole batch is
/// reproducible.
pub fn run_batch(config: &GameConfig, games: usize) -> Result<BatchSummary> {
    config.validate()?;

    let mut rng = SweepRng::new(config.seed);
    let mut summary = BatchSummary::default();

    for _ in 0..games {
        let game_config = config.clone().with_seed(rng.fork().seed());
        let report = GameSession::new(game_config)?.play()?;
        summary.record(&report);
    }

    info!(
        games = summary.games,
        cleared = summary.cleared,
        win_rate = summary.win_rate(),
        "batch finished"
    );
    Ok(summary)
}
