//! Rectangular grid of sampled cell states shared by every engine
//!
//! Cells are addressed as `(row, col)` internally. Points handed to callers use
//! the column-first [`AlgoPoint`] instead.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{AlgorithmError, Result, invalid_parameter, malformed_grid};
use crate::spatial::point::AlgoPoint;

/// Unit steps to the four edge-adjacent cells as `(d_row, d_col)`
pub const ORTHOGONAL_STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Unit steps to the eight cells of the Moore neighbourhood as `(d_row, d_col)`
pub const MOORE_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// State of one sampled cell
///
/// The meaning depends on the engine reading the grid: obstacles and endpoints
/// for path search, stones for the move suggester, liveness for the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    /// Nothing detected
    #[default]
    Empty = 0,
    /// Dark cell: obstacle, black stone, alive, or wall
    Black = 1,
    /// Red marker: path endpoint or red stone
    Red = 2,
    /// Blue marker, passable and otherwise neutral
    Blue = 3,
}

impl CellState {
    /// Every state in code order
    pub const ALL: [Self; 4] = [Self::Empty, Self::Black, Self::Red, Self::Blue];

    /// Integer code used by the text codec and the palette
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CellState {
    type Error = AlgorithmError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Black),
            2 => Ok(Self::Red),
            3 => Ok(Self::Blue),
            other => Err(AlgorithmError::InvalidSourceData {
                reason: format!("unknown cell code {other}"),
            }),
        }
    }
}

/// Fixed-size matrix of cell states
///
/// Rectangular by construction; the dimensions never change after creation.
/// A grid with zero rows or zero columns is a valid value with no cells:
/// searches find no endpoints on it, the automaton returns it unchanged and
/// the maze generator and image export reject it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<CellState>,
}

impl Grid {
    /// Create a grid with every cell `Empty`
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, CellState::Empty)
    }

    /// Create a grid with every cell set to `state`
    pub fn filled(rows: usize, cols: usize, state: CellState) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), state),
        }
    }

    /// Build a grid from row vectors
    ///
    /// No rows gives a `0 × 0` grid. Either dimension may be at most
    /// `MAX_GRID_DIMENSION`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::MalformedGrid`] if the rows have differing
    /// lengths, and [`AlgorithmError::InvalidParameter`] if either dimension
    /// exceeds `MAX_GRID_DIMENSION`
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        for (parameter, count) in [("rows", row_count), ("cols", col_count)] {
            if count > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &count,
                    &format!("grid dimensions are limited to {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != col_count)
        {
            return Err(malformed_grid(&format!(
                "row {index} has {} cells, expected {col_count}",
                row.len()
            )));
        }

        let flat: Vec<CellState> = rows.into_iter().flatten().collect();
        let cells =
            Array2::from_shape_vec((row_count, col_count), flat).map_err(|e| malformed_grid(&e))?;
        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Whether `(row, col)` lies inside the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols()
    }

    /// State at `(row, col)`, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get([row, col]).copied()
    }

    /// State at a column-first point
    pub fn at(&self, point: AlgoPoint) -> Option<CellState> {
        self.get(point.row, point.col)
    }

    /// Overwrite the state at `(row, col)`
    ///
    /// Returns false when the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> bool {
        self.cells.get_mut([row, col]).map(|cell| *cell = state).is_some()
    }

    /// Cells in row-major order as `((row, col), state)`
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), CellState)> + '_ {
        self.cells.indexed_iter().map(|(index, &state)| (index, state))
    }

    /// Number of cells holding `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Copy the grid out as row vectors
    pub fn to_rows(&self) -> Vec<Vec<CellState>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Position one step of `(d_row, d_col)` away, if still inside the grid
    pub fn offset(&self, row: usize, col: usize, step: (isize, isize)) -> Option<(usize, usize)> {
        let next_row = row.checked_add_signed(step.0)?;
        let next_col = col.checked_add_signed(step.1)?;
        self.contains(next_row, next_col)
            .then_some((next_row, next_col))
    }

    /// In-bounds edge-adjacent positions of `(row, col)`
    pub fn orthogonal_neighbours(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        ORTHOGONAL_STEPS
            .iter()
            .filter_map(move |&step| self.offset(row, col, step))
    }
}
