//! Constraints: "exactly `count` of these cells are hazards".
//!
//! A constraint is the only unit of knowledge the engine reasons over.
//! Two forms are terminal facts:
//!
//! - `count == 0`: every cell is safe.
//! - `count == cells.len()` (and non-zero): every cell is a hazard.
//!
//! ## Example
//!
//! ```
//! use minefield_kb::core::Cell;
//! use minefield_kb::knowledge::Constraint;
//!
//! let mut c = Constraint::new([Cell::new(0, 0), Cell::new(0, 1)], 1);
//! assert!(c.implied_hazards().is_empty());
//!
//! c.declare_safe(Cell::new(0, 0));
//! assert_eq!(c.implied_hazards().into_iter().collect::<Vec<_>>(), vec![Cell::new(0, 1)]);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// Exactly `count` members of `cells` are hazards.
///
/// Cells are kept in a sorted set, so the derived `Eq` and `Hash` are
/// structural and iteration order is deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraint {
    cells: BTreeSet<Cell>,
    count: usize,
}

impl Constraint {
    /// Create a new constraint.
    ///
    /// `count` must not exceed the number of distinct cells.
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: usize) -> Self {
        let cells: BTreeSet<Cell> = cells.into_iter().collect();
        debug_assert!(count <= cells.len(), "count {} exceeds {} cells", count, cells.len());
        Self { cells, count }
    }

    /// The cells this constraint ranges over.
    #[must_use]
    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    /// Number of hazards among the cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A constraint over no cells carries no information.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, if every one of them must be a hazard.
    #[must_use]
    pub fn implied_hazards(&self) -> BTreeSet<Cell> {
        if self.count > 0 && self.count == self.cells.len() {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// All cells, if none of them can be a hazard.
    #[must_use]
    pub fn implied_safe(&self) -> BTreeSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Fold in the fact that `cell` is a hazard.
    ///
    /// Removes the cell and accounts for it in `count`. The caller
    /// guarantees the fact is true. Returns whether anything changed.
    pub fn declare_hazard(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            self.count = self.count.saturating_sub(1);
            true
        } else {
            false
        }
    }

    /// Fold in the fact that `cell` is safe. Returns whether anything changed.
    pub fn declare_safe(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    /// Check whether this constraint's cells are a strict subset of `other`'s.
    #[must_use]
    pub fn is_strict_subset_of(&self, other: &Constraint) -> bool {
        self.cells.len() < other.cells.len() && self.cells.is_subset(&other.cells)
    }

    /// Apply the subset rule with `self` as the subset.
    ///
    /// If `self` ranges over a strict subset of `superset`, the cells only
    /// `superset` covers hold exactly `superset.count - self.count` hazards.
    /// Returns `None` when the rule does not apply or the counts are
    /// inconsistent.
    #[must_use]
    pub fn resolve_within(&self, superset: &Constraint) -> Option<Constraint> {
        if !self.is_strict_subset_of(superset) {
            return None;
        }
        let cells: BTreeSet<Cell> = superset.cells.difference(&self.cells).copied().collect();
        let count = superset.count.checked_sub(self.count)?;
        if count > cells.len() {
            return None;
        }
        Some(Self { cells, count })
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "}} = {}", self.count)
    }
}
