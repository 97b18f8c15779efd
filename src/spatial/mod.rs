//! Spatial data structures shared by the engines
//!
//! This module contains:
//! - The cell state enumeration and rectangular grid
//! - Column-first points used in results
//! - Compact visited-cell tracking for searches

/// Cell states and the grid container
pub mod grid;
/// Column-first point type
pub mod point;
/// Bit-packed visited set for grid searches
pub mod visited;

pub use grid::{CellState, Grid};
pub use point::AlgoPoint;
