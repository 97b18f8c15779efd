//! Uninformed maze solvers sharing the pathfinder's endpoint convention
//!
//! Breadth-first search returns a shortest route. Depth-first search returns the
//! first route it reaches, which is valid but may wander.

use std::collections::VecDeque;

use ndarray::Array2;
use tracing::debug;

use crate::algorithm::astar::{ParentMap, find_endpoints, is_passable, reconstruct_path};
use crate::algorithm::engine::{AlgorithmResult, Engine, ResultData, RunOptions};
use crate::algorithm::selector::AlgorithmKind;
use crate::io::configuration::{MESSAGE_NO_ENDPOINTS, MESSAGE_NO_PATH};
use crate::io::error::Result;
use crate::spatial::visited::VisitedSet;
use crate::spatial::{AlgoPoint, Grid};

// Right, left, down, up; pushed in reverse so the stack explores right first
const DFS_STEPS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Frontier discipline of an uninformed search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontier {
    /// First in, first out
    BreadthFirst,
    /// Last in, first out
    DepthFirst,
}

/// Route from `start` to `goal` avoiding black cells using the given frontier
pub fn solve(
    grid: &Grid,
    start: AlgoPoint,
    goal: AlgoPoint,
    frontier: Frontier,
) -> Option<Vec<AlgoPoint>> {
    if !grid.contains(start.row, start.col) {
        return None;
    }

    let (rows, cols) = grid.dimensions();
    let mut parents: ParentMap = Array2::from_elem((rows, cols), None);
    let mut visited = VisitedSet::new(rows, cols);

    match frontier {
        Frontier::BreadthFirst => {
            let mut queue = VecDeque::from([start.row_col()]);
            visited.insert(start.row, start.col);

            while let Some((row, col)) = queue.pop_front() {
                if (row, col) == goal.row_col() {
                    return Some(reconstruct_path(&parents, goal));
                }
                for (next_row, next_col) in grid.orthogonal_neighbours(row, col) {
                    if is_passable(grid, next_row, next_col) && visited.insert(next_row, next_col)
                    {
                        if let Some(parent) = parents.get_mut([next_row, next_col]) {
                            *parent = Some((row, col));
                        }
                        queue.push_back((next_row, next_col));
                    }
                }
            }
        }
        Frontier::DepthFirst => {
            let mut stack = vec![(start.row_col(), None)];

            while let Some(((row, col), parent)) = stack.pop() {
                if !visited.insert(row, col) {
                    continue;
                }
                if let Some(slot) = parents.get_mut([row, col]) {
                    *slot = parent;
                }
                if (row, col) == goal.row_col() {
                    return Some(reconstruct_path(&parents, goal));
                }
                for &step in DFS_STEPS.iter().rev() {
                    if let Some((next_row, next_col)) = grid.offset(row, col, step)
                        && is_passable(grid, next_row, next_col)
                        && !visited.contains(next_row, next_col)
                    {
                        stack.push(((next_row, next_col), Some((row, col))));
                    }
                }
            }
        }
    }

    None
}

/// Maze solver engine, breadth-first or depth-first
#[derive(Debug, Clone, Copy)]
pub struct MazeSolver {
    frontier: Frontier,
}

impl MazeSolver {
    /// Solver returning shortest routes
    pub const fn breadth_first() -> Self {
        Self {
            frontier: Frontier::BreadthFirst,
        }
    }

    /// Solver returning the first route found depth-first
    pub const fn depth_first() -> Self {
        Self {
            frontier: Frontier::DepthFirst,
        }
    }

    /// Frontier discipline this solver uses
    pub const fn frontier(&self) -> Frontier {
        self.frontier
    }
}

impl Engine for MazeSolver {
    fn kind(&self) -> AlgorithmKind {
        match self.frontier {
            Frontier::BreadthFirst => AlgorithmKind::MazeSolveBfs,
            Frontier::DepthFirst => AlgorithmKind::MazeSolveDfs,
        }
    }

    fn run(&self, grid: &Grid, _options: &RunOptions) -> Result<AlgorithmResult> {
        let Some((start, goal)) = find_endpoints(grid) else {
            return Ok(AlgorithmResult::failure(MESSAGE_NO_ENDPOINTS));
        };

        let path = solve(grid, start, goal, self.frontier);
        debug!(
            frontier = ?self.frontier,
            %start,
            %goal,
            length = path.as_ref().map(Vec::len),
            "maze solver finished"
        );

        Ok(path.map_or_else(
            || AlgorithmResult::failure(MESSAGE_NO_PATH),
            |points| AlgorithmResult::success(ResultData::Path(points)),
        ))
    }
}
