use bitvec::prelude::*;
use std::fmt;

/// Bit-packed set of grid cells, one bit per `(row, col)`
///
/// Positions outside the dimensions it was created with are never members and
/// are ignored on insertion.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl VisitedSet {
    /// Create an empty set covering a `rows × cols` grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Mark a cell as visited
    ///
    /// Returns true if the cell was not already present.
    pub fn insert(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(index) => !self.bits.replace(index, true),
            None => false,
        }
    }

    /// Test cell membership
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.index(row, col)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Number of visited cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Check if no cell has been visited
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Visited cells in row-major order as `(row, col)`
    pub fn to_vec(&self) -> Vec<(usize, usize)> {
        let cols = self.cols.max(1);
        self.bits
            .iter_ones()
            .map(|index| (index / cols, index % cols))
            .collect()
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VisitedSet({} of {}x{} cells)",
            self.count(),
            self.rows,
            self.cols
        )
    }
}
