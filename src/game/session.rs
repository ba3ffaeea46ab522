//! Autoplay loop: one knowledge engine against one board.

use tracing::{debug, info};

use crate::board::Minefield;
use crate::core::{GameConfig, SweepRng};
use crate::error::{Error, Result};
use crate::knowledge::{KnowledgeEngine, MoveSelector};

use super::report::{GameOutcome, GameReport, MoveKind, MoveRecord};

/// A single game in progress.
///
/// Each step plays a proven-safe cell when one is known, and otherwise a
/// blind move (if the configuration allows it). Observations flow from the
/// board to the engine; hazards the engine proves are flagged on the board.
pub struct GameSession {
    config: GameConfig,
    board: Minefield,
    engine: KnowledgeEngine,
    selector: Box<dyn MoveSelector>,
    moves: Vec<MoveRecord>,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Start a game on a freshly generated board.
    ///
    /// Hazard placement and move selection draw from separate streams of
    /// `config.seed`.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = SweepRng::new(config.seed);
        let board = Minefield::generate(&config, &mut rng.for_context("placement"))?;
        Ok(Self::build(config, board, rng.for_context("moves")))
    }

    /// Start a game on an explicit board.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, or if its grid or hazard count
    /// does not match the board's.
    pub fn with_board(config: GameConfig, board: Minefield) -> Result<Self> {
        config.validate()?;
        if board.dims() != config.dims() {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "board is {} but configuration is {}",
                    board.dims(),
                    config.dims()
                ),
            });
        }
        if board.hazard_count() != config.hazards {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "board has {} hazards but configuration expects {}",
                    board.hazard_count(),
                    config.hazards
                ),
            });
        }
        let move_rng = SweepRng::new(config.seed).for_context("moves");
        Ok(Self::build(config, board, move_rng))
    }

    fn build(config: GameConfig, board: Minefield, move_rng: SweepRng) -> Self {
        let engine = KnowledgeEngine::new(board.dims(), board.hazard_count());
        let selector = config.move_order.selector(move_rng);
        Self {
            config,
            board,
            engine,
            selector,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play one move.
    ///
    /// Returns `Some(outcome)` once the game has ended.
    ///
    /// # Errors
    ///
    /// `Error::GameOver` if the game already ended.
    pub fn step(&mut self) -> Result<Option<GameOutcome>> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }
        if self.is_cleared() {
            return Ok(Some(self.finish(GameOutcome::Cleared)));
        }

        let (cell, kind) = match self.engine.choose_safe_move_with(self.selector.as_mut()) {
            Some(cell) => (cell, MoveKind::Safe),
            None if !self.config.allow_blind_moves => {
                return Ok(Some(self.finish(GameOutcome::NoSafeMove)));
            }
            None => match self.engine.choose_blind_move_with(self.selector.as_mut()) {
                Some(cell) => (cell, MoveKind::Blind),
                // Every unprobed cell is a proven hazard
                None => return Ok(Some(self.finish(GameOutcome::Cleared))),
            },
        };

        if self.board.is_hazard(cell) {
            self.moves.push(MoveRecord { cell, kind, count: None });
            return Ok(Some(self.finish(GameOutcome::Detonated { cell })));
        }

        let count = self.board.observe(cell)?;
        self.engine.record_observation(cell, count)?;
        self.moves.push(MoveRecord {
            cell,
            kind,
            count: Some(count),
        });
        for hazard in self.engine.confirmed_hazards() {
            self.board.flag(hazard);
        }
        debug!(
            %cell,
            ?kind,
            count,
            safe_known = self.engine.safe_moves().len(),
            hazards_known = self.board.flagged_count(),
            "played move"
        );

        if self.is_cleared() {
            return Ok(Some(self.finish(GameOutcome::Cleared)));
        }
        if self.config.max_moves.map_or(false, |max| self.moves.len() >= max) {
            return Ok(Some(self.finish(GameOutcome::MoveLimit)));
        }
        Ok(None)
    }

    /// Play to the end and report.
    pub fn play(mut self) -> Result<GameReport> {
        while self.step()?.is_none() {}
        Ok(self.report())
    }

    fn finish(&mut self, outcome: GameOutcome) -> GameOutcome {
        info!(
            %outcome,
            moves = self.moves.len(),
            hazards_flagged = self.board.flagged_count(),
            "game finished"
        );
        self.outcome = Some(outcome);
        outcome
    }

    fn is_cleared(&self) -> bool {
        self.engine.probed_count() == self.board.safe_cell_count()
    }

    /// End-of-game report. Meaningful once `outcome()` is set.
    fn report(&self) -> GameReport {
        let blind_moves = self
            .moves
            .iter()
            .filter(|m| m.kind == MoveKind::Blind)
            .count();
        GameReport {
            config: self.config.clone(),
            outcome: self.outcome.unwrap_or(GameOutcome::MoveLimit),
            moves: self.moves.clone(),
            safe_moves: self.moves.len() - blind_moves,
            blind_moves,
            hazards_confirmed: self.engine.confirmed_hazards().len(),
            won: self.board.won(),
            stats: self.engine.stats().clone(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Minefield {
        &self.board
    }

    #[must_use]
    pub fn engine(&self) -> &KnowledgeEngine {
        &self.engine
    }

    #[must_use]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// How the game ended, or `None` while it is running.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }
}
