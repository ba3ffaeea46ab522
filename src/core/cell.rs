//! Cell identification.
//!
//! Every grid position is a `Cell` addressed by `(row, col)`, both 0-based.
//! Cells are plain values: two cells with the same coordinates are the same
//! cell, wherever they were created.
//!
//! ## Ordering
//!
//! Cells order lexicographically, row first:
//!
//! ```
//! use minefield_kb::core::Cell;
//!
//! assert!(Cell::new(0, 5) < Cell::new(1, 0));
//! assert!(Cell::new(2, 1) < Cell::new(2, 3));
//! ```

use serde::{Deserialize, Serialize};

/// A single grid position.
///
/// Field order matters: the derived `Ord` compares `row` before `col`,
/// which is the tie-break used for deterministic move selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        assert_eq!(Cell::from((3, 4)), Cell::new(3, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(1, 2).to_string(), "(1, 2)");
    }

    #[test]
    fn test_row_major_ordering() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }
}
