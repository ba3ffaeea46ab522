//! Ground-truth board: where the hazards are.
//!
//! The `Minefield` is the engine's external collaborator. It answers
//! neighbor-count queries and tracks which hazards have been flagged. It
//! knows nothing about inference.
//!
//! ## Usage
//!
//! ```
//! use minefield_kb::board::Minefield;
//! use minefield_kb::core::{Cell, GridDims};
//!
//! let field = Minefield::with_hazards(GridDims::new(3, 3), [Cell::new(0, 0)]).unwrap();
//!
//! assert!(field.is_hazard(Cell::new(0, 0)));
//! assert_eq!(field.observe(Cell::new(1, 1)).unwrap(), 1);
//! assert_eq!(field.observe(Cell::new(2, 2)).unwrap(), 0);
//! ```

use rustc_hash::FxHashSet;

use crate::core::{Cell, GameConfig, GridDims, SweepRng};
use crate::error::{Error, Result};

/// A grid with a fixed set of hazard cells.
#[derive(Clone, Debug)]
pub struct Minefield {
    dims: GridDims,

    /// Hazard locations.
    hazards: FxHashSet<Cell>,

    /// Hazards flagged so far. Always a subset of `hazards`.
    flagged: FxHashSet<Cell>,
}

impl Minefield {
    /// Place `config.hazards` hazards uniformly at random.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is not playable.
    pub fn generate(config: &GameConfig, rng: &mut SweepRng) -> Result<Self> {
        config.validate()?;

        let dims = config.dims();
        let mut cells: Vec<Cell> = dims.cells().collect();
        rng.shuffle(&mut cells);
        cells.truncate(config.hazards);

        Ok(Self {
            dims,
            hazards: cells.into_iter().collect(),
            flagged: FxHashSet::default(),
        })
    }

    /// Build a board with hazards at exactly the given cells.
    ///
    /// # Errors
    ///
    /// Fails on an empty grid, a grid whose cell count overflows, or a
    /// hazard outside the grid.
    pub fn with_hazards(dims: GridDims, hazards: impl IntoIterator<Item = Cell>) -> Result<Self> {
        match dims.checked_cell_count() {
            Some(0) => {
                return Err(Error::EmptyGrid {
                    height: dims.height,
                    width: dims.width,
                })
            }
            None => {
                return Err(Error::InvalidConfiguration {
                    message: format!("{} grid has too many cells", dims),
                })
            }
            Some(_) => {}
        }

        let mut set = FxHashSet::default();
        for cell in hazards {
            if !dims.contains(cell) {
                return Err(Error::OutOfBounds {
                    cell,
                    height: dims.height,
                    width: dims.width,
                });
            }
            set.insert(cell);
        }

        Ok(Self {
            dims,
            hazards: set,
            flagged: FxHashSet::default(),
        })
    }

    /// Grid dimensions.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[must_use]
    pub fn is_hazard(&self, cell: Cell) -> bool {
        self.hazards.contains(&cell)
    }

    /// Number of hazards adjacent to `cell` (8-connected, clipped at edges).
    ///
    /// Does not check whether `cell` itself is a hazard; the game loop
    /// must never observe one.
    ///
    /// # Errors
    ///
    /// Fails for a cell outside the grid.
    pub fn observe(&self, cell: Cell) -> Result<usize> {
        if !self.dims.contains(cell) {
            return Err(Error::OutOfBounds {
                cell,
                height: self.dims.height,
                width: self.dims.width,
            });
        }
        Ok(self
            .dims
            .neighbors(cell)
            .iter()
            .filter(|n| self.hazards.contains(n))
            .count())
    }

    /// Hazard cells, sorted.
    #[must_use]
    pub fn hazards(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.hazards.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    #[must_use]
    pub fn hazard_count(&self) -> usize {
        self.hazards.len()
    }

    /// Cells that are not hazards.
    #[must_use]
    pub fn safe_cell_count(&self) -> usize {
        self.dims.cell_count() - self.hazards.len()
    }

    /// Flag `cell` as a found hazard.
    ///
    /// Returns whether the flag was placed; flags on non-hazard cells are
    /// refused.
    pub fn flag(&mut self, cell: Cell) -> bool {
        self.hazards.contains(&cell) && self.flagged.insert(cell)
    }

    #[must_use]
    pub fn flagged_count(&self) -> usize {
        self.flagged.len()
    }

    /// True once every hazard has been flagged.
    #[must_use]
    pub fn won(&self) -> bool {
        self.flagged == self.hazards
    }
}
