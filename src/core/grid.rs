//! Grid geometry: bounds checks and neighborhoods.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Cell;

/// Neighbor list for a single cell.
///
/// SmallVec keeps the (at most 8) neighbors on the stack.
pub type Neighbors = SmallVec<[Cell; 8]>;

/// Fixed `height x width` grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    pub height: usize,
    pub width: usize,
}

impl GridDims {
    /// Create new grid dimensions.
    #[must_use]
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Total number of cells, saturating at `usize::MAX`.
    ///
    /// Configurations and boards reject dimensions whose product overflows,
    /// so for any grid that is actually played this is exact.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.height.saturating_mul(self.width)
    }

    /// Total number of cells, or `None` if `height * width` overflows.
    #[must_use]
    pub const fn checked_cell_count(self) -> Option<usize> {
        self.height.checked_mul(self.width)
    }

    /// Check whether a cell lies inside the grid.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Cells within Chebyshev distance 1 of `cell`, clipped to the grid,
    /// excluding `cell` itself. Returned in row-major order.
    ///
    /// ```
    /// use minefield_kb::core::{Cell, GridDims};
    ///
    /// let dims = GridDims::new(3, 3);
    /// assert_eq!(dims.neighbors(Cell::new(1, 1)).len(), 8);
    /// assert_eq!(dims.neighbors(Cell::new(0, 0)).len(), 3);
    /// ```
    #[must_use]
    pub fn neighbors(self, cell: Cell) -> Neighbors {
        let mut out = Neighbors::new();
        for row in cell.row.saturating_sub(1)..=cell.row.saturating_add(1) {
            for col in cell.col.saturating_sub(1)..=cell.col.saturating_add(1) {
                let candidate = Cell::new(row, col);
                if candidate != cell && self.contains(candidate) {
                    out.push(candidate);
                }
            }
        }
        out
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }
}

impl std::fmt::Display for GridDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}
