//! Conway's Game of Life on a bounded grid
//!
//! Black cells are alive and everything else is dead. Neighbours outside the
//! grid do not exist, so edges behave as permanently dead.

use tracing::debug;

use crate::algorithm::engine::{AlgorithmResult, Engine, ResultData, RunOptions};
use crate::algorithm::selector::AlgorithmKind;
use crate::io::error::Result;
use crate::spatial::grid::MOORE_STEPS;
use crate::spatial::{CellState, Grid};

/// Alive cells among the eight neighbours of `(row, col)`
pub fn count_alive_neighbours(grid: &Grid, row: usize, col: usize) -> usize {
    MOORE_STEPS
        .iter()
        .filter_map(|&step| grid.offset(row, col, step))
        .filter(|&(r, c)| grid.get(r, c) == Some(CellState::Black))
        .count()
}

/// Game of Life stepper
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOfLife;

impl GameOfLife {
    /// Next generation under B3/S23
    ///
    /// Live cells come out `Black`; every other cell comes out `Empty`.
    pub fn step(grid: &Grid) -> Grid {
        let (rows, cols) = grid.dimensions();
        let mut next = Grid::new(rows, cols);

        for ((row, col), state) in grid.cells() {
            let neighbours = count_alive_neighbours(grid, row, col);
            let alive = match state {
                CellState::Black => matches!(neighbours, 2 | 3),
                _ => neighbours == 3,
            };
            if alive {
                next.set(row, col, CellState::Black);
            }
        }

        next
    }

    /// `generations` successive steps, excluding the starting grid
    ///
    /// Generations are computed lazily, one per item.
    pub fn evolve(grid: &Grid, generations: usize) -> impl Iterator<Item = Grid> {
        (0..generations).scan(grid.clone(), |current, _| {
            *current = Self::step(current);
            Some(current.clone())
        })
    }
}

impl Engine for GameOfLife {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::GameOfLife
    }

    fn run(&self, grid: &Grid, _options: &RunOptions) -> Result<AlgorithmResult> {
        let next = Self::step(grid);
        debug!(
            alive_before = grid.count(CellState::Black),
            alive_after = next.count(CellState::Black),
            "automaton stepped"
        );
        Ok(AlgorithmResult::success(ResultData::Grid(next)))
    }
}
