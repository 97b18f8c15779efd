//! Common contract implemented by every grid engine
//!
//! An engine takes a grid and typed options and returns an [`AlgorithmResult`].
//! Expected failures (no endpoints, no path, full board) are results with
//! `is_success() == false`; only broken preconditions surface as `Err`.

use crate::algorithm::selector::AlgorithmKind;
use crate::io::error::Result;
use crate::spatial::{AlgoPoint, CellState, Grid};

/// Payload of a successful run, one variant per output shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultData {
    /// Ordered waypoints from start to goal inclusive
    Path(Vec<AlgoPoint>),
    /// A single suggested cell
    Move(AlgoPoint),
    /// A complete replacement grid
    Grid(Grid),
}

/// Outcome of one engine run
///
/// Successful results always carry data and an empty message; failed results
/// never carry data and hold a human-readable diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmResult {
    success: bool,
    data: Option<ResultData>,
    message: String,
}

impl AlgorithmResult {
    /// Successful result carrying `data`
    pub const fn success(data: ResultData) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: String::new(),
        }
    }

    /// Failed result with a diagnostic message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }

    /// Whether the engine produced data
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Payload of a successful run
    pub const fn data(&self) -> Option<&ResultData> {
        self.data.as_ref()
    }

    /// Diagnostic of a failed run, empty on success
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Take ownership of the payload
    pub fn into_data(self) -> Option<ResultData> {
        self.data
    }

    /// Path payload, if this result holds one
    pub fn path(&self) -> Option<&[AlgoPoint]> {
        match &self.data {
            Some(ResultData::Path(points)) => Some(points),
            _ => None,
        }
    }

    /// Move payload, if this result holds one
    pub const fn chosen_move(&self) -> Option<AlgoPoint> {
        match &self.data {
            Some(ResultData::Move(point)) => Some(*point),
            _ => None,
        }
    }

    /// Grid payload, if this result holds one
    pub const fn grid(&self) -> Option<&Grid> {
        match &self.data {
            Some(ResultData::Grid(grid)) => Some(grid),
            _ => None,
        }
    }
}

/// Side to move for the adversarial engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    /// Black stones
    #[default]
    Black,
    /// Red stones
    Red,
}

impl Player {
    /// The other side
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::Red,
            Self::Red => Self::Black,
        }
    }

    /// Cell state of this side's stones
    pub const fn stone(self) -> CellState {
        match self {
            Self::Black => CellState::Black,
            Self::Red => CellState::Red,
        }
    }
}

/// Per-run parameters beyond the grid itself
///
/// `RunOptions::default()` is the behaviour when a caller has nothing to add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Side the move suggester plays for
    pub turn: Player,
    /// Seed for the maze generator; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl RunOptions {
    /// Options with the given side to move
    #[must_use]
    pub const fn with_turn(mut self, turn: Player) -> Self {
        self.turn = turn;
        self
    }

    /// Options with a fixed random seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A stateless strategy over a grid of cell states
pub trait Engine: Send + Sync {
    /// Which algorithm this engine implements
    fn kind(&self) -> AlgorithmKind;

    /// Run the algorithm on `grid` without modifying it
    ///
    /// # Errors
    ///
    /// Returns an error only when the grid violates a precondition of the
    /// engine (for example a maze grid smaller than 3x3)
    fn run(&self, grid: &Grid, options: &RunOptions) -> Result<AlgorithmResult>;
}
