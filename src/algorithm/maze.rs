//! Perfect maze generation by randomized recursive backtracking
//!
//! Passages live on odd coordinates starting at (1, 1) and walls between them on
//! the cells in between. The outer ring always stays wall. Backtracking uses an
//! explicit stack so large grids cannot exhaust the call stack; directions are
//! shuffled once per opened cell, which keeps the order in which randomness is
//! consumed identical to the recursive formulation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::algorithm::engine::{AlgorithmResult, Engine, ResultData, RunOptions};
use crate::algorithm::selector::AlgorithmKind;
use crate::io::configuration::MIN_MAZE_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{CellState, Grid};

/// Two-cell moves between passage cells as `(d_row, d_col)`
pub const CARVE_STEPS: [(isize, isize); 4] = [(0, 2), (0, -2), (2, 0), (-2, 0)];

/// Starting passage cell as `(row, col)`
pub const MAZE_ORIGIN: (usize, usize) = (1, 1);

struct Frame {
    position: (usize, usize),
    steps: [(isize, isize); 4],
    next: usize,
}

fn open_cell<R: Rng + ?Sized>(maze: &mut Grid, position: (usize, usize), rng: &mut R) -> Frame {
    maze.set(position.0, position.1, CellState::Empty);
    let mut steps = CARVE_STEPS;
    steps.shuffle(rng);
    Frame {
        position,
        steps,
        next: 0,
    }
}

fn is_interior(maze: &Grid, row: usize, col: usize) -> bool {
    (1..maze.rows().saturating_sub(1)).contains(&row)
        && (1..maze.cols().saturating_sub(1)).contains(&col)
}

/// Maze generator engine
#[derive(Debug, Clone, Copy, Default)]
pub struct MazeGenerator;

impl MazeGenerator {
    /// Carve a `rows × cols` maze using randomness from `rng`
    ///
    /// Black cells are walls and empty cells are passages. Even dimensions are
    /// accepted; the last interior row or column then stays solid wall.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgorithmError::InvalidParameter`] if either dimension
    /// is below 3, since no interior cell would exist
    pub fn carve<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
        if rows < MIN_MAZE_DIMENSION || cols < MIN_MAZE_DIMENSION {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{rows}x{cols}"),
                &format!("maze needs at least {MIN_MAZE_DIMENSION}x{MIN_MAZE_DIMENSION} cells"),
            ));
        }

        let mut maze = Grid::filled(rows, cols, CellState::Black);
        let mut stack = vec![open_cell(&mut maze, MAZE_ORIGIN, rng)];

        while let Some(frame) = stack.last_mut() {
            let Some(&step) = frame.steps.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            let (row, col) = frame.position;

            let Some(target) = maze.offset(row, col, step) else {
                continue;
            };
            if !is_interior(&maze, target.0, target.1)
                || maze.get(target.0, target.1) != Some(CellState::Black)
            {
                continue;
            }

            if let Some((wall_row, wall_col)) = maze.offset(row, col, (step.0 / 2, step.1 / 2)) {
                maze.set(wall_row, wall_col, CellState::Empty);
            }
            let opened = open_cell(&mut maze, target, rng);
            stack.push(opened);
        }

        Ok(maze)
    }
}

impl Engine for MazeGenerator {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::MazeGen
    }

    fn run(&self, grid: &Grid, options: &RunOptions) -> Result<AlgorithmResult> {
        let mut rng = options.seed.map_or_else(
            || StdRng::from_rng(&mut rand::rng()),
            StdRng::seed_from_u64,
        );

        let maze = Self::carve(grid.rows(), grid.cols(), &mut rng)?;
        debug!(
            rows = maze.rows(),
            cols = maze.cols(),
            seed = options.seed,
            passages = maze.count(CellState::Empty),
            "maze carved"
        );
        Ok(AlgorithmResult::success(ResultData::Grid(maze)))
    }
}
