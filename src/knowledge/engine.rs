//! The knowledge engine: accumulated constraints and derived facts.
//!
//! ## Lifecycle of an observation
//!
//! 1. The probed cell is recorded and declared safe.
//! 2. Its neighbors, minus cells already settled, become a new constraint
//!    (known hazards are subtracted from the count).
//! 3. Inference runs to a fixpoint: subset resolution derives new
//!    constraints, terminal constraints settle cells, and every settled cell
//!    is folded out of every constraint.
//!
//! The engine never exposes its collections mutably; callers feed it
//! `(cell, count)` observations and read back sorted snapshots.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::constraint::Constraint;
use super::inference;
use super::selector::{FirstCell, MoveSelector};
use super::stats::InferenceStats;
use crate::core::{Cell, GameConfig, GridDims, Neighbors};
use crate::error::{Error, Result};

/// A settled status for a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fact {
    Safe,
    Hazard,
}

/// Forward-chaining inference over neighbor-count observations.
#[derive(Clone, Debug)]
pub struct KnowledgeEngine {
    dims: GridDims,

    /// Expected total hazards on the grid. Informational only.
    hazard_total: usize,

    /// Cells an observation has been recorded for.
    probed: FxHashSet<Cell>,

    /// Cells proven not to be hazards.
    confirmed_safe: FxHashSet<Cell>,

    /// Cells proven to be hazards.
    confirmed_hazards: FxHashSet<Cell>,

    /// Retained constraints, in insertion order. Never holds an empty or
    /// duplicate constraint, or a cell that is already settled.
    constraints: Vec<Constraint>,

    stats: InferenceStats,
}

impl KnowledgeEngine {
    /// Create an engine for a grid with `hazard_total` expected hazards.
    #[must_use]
    pub fn new(dims: GridDims, hazard_total: usize) -> Self {
        Self {
            dims,
            hazard_total,
            probed: FxHashSet::default(),
            confirmed_safe: FxHashSet::default(),
            confirmed_hazards: FxHashSet::default(),
            constraints: Vec::new(),
            stats: InferenceStats::new(),
        }
    }

    /// Create an engine sized from a game configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.dims(), config.hazards)
    }

    // === Ingestion ===

    /// Record that probing `cell` revealed `count` adjacent hazards, then
    /// run inference to a fixpoint.
    ///
    /// Re-observing a probed cell with a consistent count changes nothing.
    ///
    /// # Errors
    ///
    /// Rejects, without touching any state, a cell outside the grid, a cell
    /// already confirmed as a hazard, a count larger than the cell's
    /// neighborhood, and a count that contradicts what is already known
    /// about the neighbors.
    pub fn record_observation(&mut self, cell: Cell, count: usize) -> Result<()> {
        let (unknown, remaining) = self.check_observation(cell, count)?;

        if !self.probed.insert(cell) {
            debug!(%cell, count, "cell already probed, folding redundant observation");
        }
        self.stats.record_observation();
        self.declare_fact(cell, Fact::Safe);

        let constraint = Constraint::new(unknown.iter().copied(), remaining);
        debug!(%cell, count, constraint = %constraint, "recorded observation");
        if !constraint.is_empty() && !self.constraints.contains(&constraint) {
            self.constraints.push(constraint);
        }
        if remaining == 0 {
            for neighbor in unknown {
                self.declare_fact(neighbor, Fact::Safe);
            }
        }

        self.run_to_fixpoint();
        Ok(())
    }

    /// Validate an observation and return the unsettled neighbors together
    /// with the number of hazards still unaccounted for among them.
    fn check_observation(&self, cell: Cell, count: usize) -> Result<(Neighbors, usize)> {
        if !self.dims.contains(cell) {
            return Err(Error::OutOfBounds {
                cell,
                height: self.dims.height,
                width: self.dims.width,
            });
        }
        if self.confirmed_hazards.contains(&cell) {
            return Err(Error::ProbedHazard { cell });
        }

        let neighbors = self.dims.neighbors(cell);
        if count > neighbors.len() {
            return Err(Error::CountExceedsNeighbors {
                cell,
                count,
                neighbors: neighbors.len(),
            });
        }

        let known_hazards = neighbors
            .iter()
            .filter(|n| self.confirmed_hazards.contains(n))
            .count();
        let unknown: Neighbors = neighbors
            .iter()
            .copied()
            .filter(|n| !self.confirmed_safe.contains(n) && !self.confirmed_hazards.contains(n))
            .collect();

        let remaining = count.checked_sub(known_hazards).ok_or_else(|| Error::Contradiction {
            cell,
            count,
            reason: format!("{} neighbors are already confirmed hazards", known_hazards),
        })?;
        if remaining > unknown.len() {
            return Err(Error::Contradiction {
                cell,
                count,
                reason: format!("only {} neighbors remain unsettled", unknown.len()),
            });
        }

        Ok((unknown, remaining))
    }

    // === Propagation ===

    /// Settle `cell` and fold the fact into every retained constraint.
    ///
    /// Returns whether the fact was new. A fact contradicting the opposite
    /// confirmed set is ignored so the two sets stay disjoint.
    pub(crate) fn declare_fact(&mut self, cell: Cell, fact: Fact) -> bool {
        let (target, opposite) = match fact {
            Fact::Safe => (&mut self.confirmed_safe, &self.confirmed_hazards),
            Fact::Hazard => (&mut self.confirmed_hazards, &self.confirmed_safe),
        };
        if opposite.contains(&cell) {
            warn!(%cell, ?fact, "ignoring fact that contradicts confirmed knowledge");
            return false;
        }

        let is_new = target.insert(cell);
        for constraint in &mut self.constraints {
            match fact {
                Fact::Safe => constraint.declare_safe(cell),
                Fact::Hazard => constraint.declare_hazard(cell),
            };
        }

        if is_new {
            self.stats.record_fact();
            trace!(%cell, ?fact, "learned fact");
        }
        is_new
    }

    /// Alternate subset resolution and settling until a pass neither
    /// derives a constraint nor learns a fact.
    pub(crate) fn run_to_fixpoint(&mut self) {
        let facts_before = self.stats.facts_learned;
        let mut passes = 0usize;
        let mut derived_total = 0usize;

        loop {
            passes += 1;
            let derived = inference::resolve_pairs(&self.constraints);
            for constraint in &derived {
                trace!(constraint = %constraint, "derived constraint");
            }
            let derived_count = derived.len();
            derived_total += derived_count;
            self.constraints.extend(derived);

            let learned = self.settle();
            if derived_count == 0 && learned == 0 {
                break;
            }
        }

        self.stats.record_fixpoint(passes, derived_total);
        debug!(
            passes,
            derived = derived_total,
            facts = self.stats.facts_learned - facts_before,
            constraints = self.constraints.len(),
            "inference reached fixpoint"
        );
    }

    /// Declare every fact implied by a terminal constraint, repeating while
    /// new facts appear, then prune. Returns the number of new facts.
    fn settle(&mut self) -> usize {
        let mut learned = 0;
        loop {
            let mut changed = 0;
            for (cell, fact) in inference::implied_facts(&self.constraints) {
                if self.declare_fact(cell, fact) {
                    changed += 1;
                }
            }
            learned += changed;
            if changed == 0 {
                break;
            }
        }
        inference::prune(&mut self.constraints);
        learned
    }

    // === Move queries ===

    /// A confirmed-safe cell not yet probed: the smallest one.
    #[must_use]
    pub fn choose_safe_move(&self) -> Option<Cell> {
        self.choose_safe_move_with(&mut FirstCell)
    }

    /// A confirmed-safe cell not yet probed, picked by `selector`.
    pub fn choose_safe_move_with<S: MoveSelector + ?Sized>(&self, selector: &mut S) -> Option<Cell> {
        selector.select(&self.safe_moves())
    }

    /// A cell neither probed nor confirmed hazardous: the smallest one.
    #[must_use]
    pub fn choose_blind_move(&self) -> Option<Cell> {
        self.choose_blind_move_with(&mut FirstCell)
    }

    /// A cell neither probed nor confirmed hazardous, picked by `selector`.
    pub fn choose_blind_move_with<S: MoveSelector + ?Sized>(&self, selector: &mut S) -> Option<Cell> {
        selector.select(&self.blind_moves())
    }

    /// Confirmed-safe cells not yet probed, sorted.
    #[must_use]
    pub fn safe_moves(&self) -> Vec<Cell> {
        let mut moves: Vec<Cell> = self
            .confirmed_safe
            .iter()
            .copied()
            .filter(|c| !self.probed.contains(c))
            .collect();
        moves.sort_unstable();
        moves
    }

    /// Cells neither probed nor confirmed hazardous, sorted.
    #[must_use]
    pub fn blind_moves(&self) -> Vec<Cell> {
        self.dims
            .cells()
            .filter(|c| !self.probed.contains(c) && !self.confirmed_hazards.contains(c))
            .collect()
    }

    // === State queries ===

    /// Grid dimensions.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Expected total hazards on the grid.
    #[must_use]
    pub fn hazard_total(&self) -> usize {
        self.hazard_total
    }

    /// Expected hazards not yet confirmed.
    #[must_use]
    pub fn remaining_hazards(&self) -> usize {
        self.hazard_total.saturating_sub(self.confirmed_hazards.len())
    }

    /// Probed cells, sorted.
    #[must_use]
    pub fn probed(&self) -> Vec<Cell> {
        sorted(&self.probed)
    }

    /// Confirmed-safe cells, sorted.
    #[must_use]
    pub fn confirmed_safe(&self) -> Vec<Cell> {
        sorted(&self.confirmed_safe)
    }

    /// Confirmed hazards, sorted.
    #[must_use]
    pub fn confirmed_hazards(&self) -> Vec<Cell> {
        sorted(&self.confirmed_hazards)
    }

    #[must_use]
    pub fn probed_count(&self) -> usize {
        self.probed.len()
    }

    #[must_use]
    pub fn is_probed(&self, cell: Cell) -> bool {
        self.probed.contains(&cell)
    }

    #[must_use]
    pub fn is_safe(&self, cell: Cell) -> bool {
        self.confirmed_safe.contains(&cell)
    }

    #[must_use]
    pub fn is_hazard(&self, cell: Cell) -> bool {
        self.confirmed_hazards.contains(&cell)
    }

    /// Retained constraints, in insertion order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Lifetime inference statistics.
    #[must_use]
    pub fn stats(&self) -> &InferenceStats {
        &self.stats
    }
}

fn sorted(set: &FxHashSet<Cell>) -> Vec<Cell> {
    let mut cells: Vec<Cell> = set.iter().copied().collect();
    cells.sort_unstable();
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col)
    }

    fn engine(height: usize, width: usize) -> KnowledgeEngine {
        KnowledgeEngine::new(GridDims::new(height, width), 0)
    }

    #[test]
    fn test_subset_resolution_confirms_hazard() {
        let (c1, c2, c3, c4) = (cell(0, 0), cell(0, 1), cell(0, 2), cell(1, 0));
        let mut engine = engine(3, 3);
        engine.constraints.push(Constraint::new([c1, c2, c3], 1));
        engine.constraints.push(Constraint::new([c1, c2, c3, c4], 2));

        engine.run_to_fixpoint();

        assert!(engine.is_hazard(c4));
        assert_eq!(engine.confirmed_hazards(), vec![c4]);
        // The superset folded down to a duplicate of the subset and was pruned.
        assert_eq!(engine.constraints(), &[Constraint::new([c1, c2, c3], 1)]);
    }

    #[test]
    fn test_full_count_confirms_hazards() {
        let mut engine = engine(3, 3);
        engine.constraints.push(Constraint::new([cell(0, 0), cell(2, 2)], 2));

        engine.run_to_fixpoint();

        assert_eq!(engine.confirmed_hazards(), vec![cell(0, 0), cell(2, 2)]);
        assert!(engine.constraints().is_empty());
    }

    #[test]
    fn test_settle_cascades_within_one_pass() {
        let mut engine = engine(3, 3);
        engine.constraints.push(Constraint::new([cell(0, 0)], 0));
        engine.constraints.push(Constraint::new([cell(0, 0), cell(0, 1)], 1));

        engine.run_to_fixpoint();

        assert!(engine.is_safe(cell(0, 0)));
        assert!(engine.is_hazard(cell(0, 1)));
        assert!(engine.constraints().is_empty());
    }

    #[test]
    fn test_declare_fact_folds_into_constraints() {
        let mut engine = engine(3, 3);
        engine.constraints.push(Constraint::new([cell(0, 0), cell(0, 1), cell(0, 2)], 2));

        assert!(engine.declare_fact(cell(0, 1), Fact::Hazard));
        assert_eq!(engine.constraints()[0], Constraint::new([cell(0, 0), cell(0, 2)], 1));

        assert!(engine.declare_fact(cell(0, 0), Fact::Safe));
        assert_eq!(engine.constraints()[0], Constraint::new([cell(0, 2)], 1));

        // Repeating a known fact is not new
        assert!(!engine.declare_fact(cell(0, 0), Fact::Safe));
    }

    #[test]
    fn test_declare_fact_ignores_contradiction() {
        let mut engine = engine(3, 3);
        engine.declare_fact(cell(1, 1), Fact::Safe);

        assert!(!engine.declare_fact(cell(1, 1), Fact::Hazard));
        assert!(engine.is_safe(cell(1, 1)));
        assert!(!engine.is_hazard(cell(1, 1)));
    }

    #[test]
    fn test_record_observation_subtracts_known_hazards() {
        let mut engine = engine(3, 3);
        engine.declare_fact(cell(0, 0), Fact::Hazard);
        engine.declare_fact(cell(0, 1), Fact::Safe);

        engine.record_observation(cell(1, 0), 2).unwrap();

        // Neighbors of (1,0): (0,0) hazard, (0,1) safe, (1,1), (2,0), (2,1)
        assert_eq!(
            engine.constraints(),
            &[Constraint::new([cell(1, 1), cell(2, 0), cell(2, 1)], 1)]
        );
    }

    #[test]
    fn test_record_observation_rejects_out_of_bounds() {
        let mut engine = engine(3, 3);
        let err = engine.record_observation(cell(3, 0), 0).unwrap_err();

        assert!(matches!(err, Error::OutOfBounds { .. }));
        assert_eq!(engine.probed_count(), 0);
    }

    #[test]
    fn test_record_observation_rejects_excess_count() {
        let mut engine = engine(3, 3);
        let err = engine.record_observation(cell(0, 0), 4).unwrap_err();

        assert_eq!(
            err,
            Error::CountExceedsNeighbors {
                cell: cell(0, 0),
                count: 4,
                neighbors: 3
            }
        );
    }

    #[test]
    fn test_record_observation_rejects_known_hazard() {
        let mut engine = engine(3, 3);
        engine.declare_fact(cell(2, 2), Fact::Hazard);

        let err = engine.record_observation(cell(2, 2), 0).unwrap_err();
        assert_eq!(err, Error::ProbedHazard { cell: cell(2, 2) });
        assert!(!engine.is_probed(cell(2, 2)));
    }

    #[test]
    fn test_record_observation_rejects_contradictions() {
        let mut engine = engine(3, 3);
        engine.declare_fact(cell(0, 1), Fact::Hazard);

        // (0,0) sees the known hazard at (0,1), so a count of 0 is impossible.
        let err = engine.record_observation(cell(0, 0), 0).unwrap_err();
        assert!(matches!(err, Error::Contradiction { .. }));

        engine.declare_fact(cell(1, 0), Fact::Safe);
        engine.declare_fact(cell(1, 1), Fact::Safe);
        // One known hazard and no unsettled neighbors left: 2 is impossible.
        let err = engine.record_observation(cell(0, 0), 2).unwrap_err();
        assert!(matches!(err, Error::Contradiction { .. }));

        assert!(engine.probed().is_empty());
    }

    #[test]
    fn test_stats_accumulate() {
        let mut engine = engine(3, 3);
        engine.record_observation(cell(1, 1), 0).unwrap();

        let stats = engine.stats();
        assert_eq!(stats.observations, 1);
        assert!(stats.passes >= 1);
        // (1,1) plus its 8 neighbors
        assert_eq!(stats.facts_learned, 9);
    }

    #[test]
    fn test_remaining_hazards() {
        let mut engine = KnowledgeEngine::new(GridDims::new(3, 3), 2);
        assert_eq!(engine.remaining_hazards(), 2);

        engine.declare_fact(cell(0, 0), Fact::Hazard);
        assert_eq!(engine.remaining_hazards(), 1);
    }
}
