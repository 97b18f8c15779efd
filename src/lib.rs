//! Interchangeable algorithm engines over small grids of sampled cell states
//!
//! A camera-facing caller samples a board into a [`spatial::Grid`] of
//! [`spatial::CellState`] values, picks an engine through
//! [`algorithm::selector`], and consumes the typed [`algorithm::ResultData`]
//! it returns: a path, a single move, or a new grid.
//!
//! ```
//! use gridalgo::algorithm::{AlgorithmKind, RunOptions};
//! use gridalgo::spatial::{CellState, Grid};
//!
//! let mut grid = Grid::new(3, 3);
//! grid.set(0, 0, CellState::Red);
//! grid.set(2, 2, CellState::Red);
//!
//! let engine = AlgorithmKind::PathAStar.engine();
//! let result = engine.run(&grid, &RunOptions::default())?;
//! assert_eq!(result.path().map(<[_]>::len), Some(5));
//! # Ok::<(), gridalgo::AlgorithmError>(())
//! ```

#![forbid(unsafe_code)]

/// Engine contract and the individual grid algorithms
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Mathematical utilities for mapping grid cells onto the board
pub mod math;
/// Grid, cell state and point types
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
