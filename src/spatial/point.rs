//! Column-first coordinates handed to callers

use std::fmt;

/// Immutable `(col, row)` coordinate of a grid cell
///
/// Column comes first so renderers can treat it as `(x, y)`. Grid storage is
/// row-major, so convert with [`AlgoPoint::from_row_col`] and
/// [`AlgoPoint::row_col`] rather than reordering by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlgoPoint {
    /// Zero-based column
    pub col: usize,
    /// Zero-based row
    pub row: usize,
}

impl AlgoPoint {
    /// Create a point from column and row
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Create a point from a row-major `(row, col)` position
    pub const fn from_row_col((row, col): (usize, usize)) -> Self {
        Self { col, row }
    }

    /// Row-major `(row, col)` position
    pub const fn row_col(self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Number of unit moves between two points on a 4-connected grid
    pub const fn manhattan(self, other: Self) -> usize {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }

    /// Whether two points differ by exactly one unit in exactly one axis
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for AlgoPoint {
    /// Interprets the tuple as `(col, row)`
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for AlgoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
