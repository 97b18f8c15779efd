//! A* search between the first two red cells on a 4-connected grid
//!
//! The first red cell in row-major order is the start and the next one is the
//! goal; any further red cells are ordinary passable cells. Black cells block
//! movement, every step costs one, and the heuristic is the Manhattan distance.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ndarray::Array2;
use tracing::debug;

use crate::algorithm::engine::{AlgorithmResult, Engine, ResultData, RunOptions};
use crate::algorithm::selector::AlgorithmKind;
use crate::io::configuration::{MESSAGE_NO_ENDPOINTS, MESSAGE_NO_PATH};
use crate::io::error::Result;
use crate::spatial::visited::VisitedSet;
use crate::spatial::{AlgoPoint, CellState, Grid};

/// Predecessor of each cell on its best known route, `None` for unreached cells
pub type ParentMap = Array2<Option<(usize, usize)>>;

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells taken off the open set and expanded
    pub expanded: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    f_score: usize,
    g_score: usize,
    position: (usize, usize),
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on f for a min-heap; deeper entries first among equal f
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| self.g_score.cmp(&other.g_score))
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Locate the start and goal: the first and second red cells in row-major order
pub fn find_endpoints(grid: &Grid) -> Option<(AlgoPoint, AlgoPoint)> {
    let mut reds = grid
        .cells()
        .filter(|&(_, state)| state == CellState::Red)
        .map(|(position, _)| AlgoPoint::from_row_col(position));
    let start = reds.next()?;
    let goal = reds.next()?;
    Some((start, goal))
}

/// Whether a search may step onto the cell
pub fn is_passable(grid: &Grid, row: usize, col: usize) -> bool {
    grid.get(row, col)
        .is_some_and(|state| state != CellState::Black)
}

/// Walk predecessor links back from `goal` and return the route start-first
pub fn reconstruct_path(parents: &ParentMap, goal: AlgoPoint) -> Vec<AlgoPoint> {
    let mut path = vec![goal];
    let mut current = goal.row_col();
    while let Some(&Some(previous)) = parents.get([current.0, current.1]) {
        path.push(AlgoPoint::from_row_col(previous));
        current = previous;
    }
    path.reverse();
    path
}

/// A* pathfinder engine
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPathfinder;

impl AStarPathfinder {
    /// Shortest 4-connected route from `start` to `goal` avoiding black cells
    ///
    /// A cell is expanded at most once; entries left in the open set for a
    /// cell that has since been closed are discarded when popped.
    pub fn search(
        grid: &Grid,
        start: AlgoPoint,
        goal: AlgoPoint,
    ) -> (Option<Vec<AlgoPoint>>, SearchStats) {
        let (rows, cols) = grid.dimensions();
        let mut stats = SearchStats::default();

        if !grid.contains(start.row, start.col) || !grid.contains(goal.row, goal.col) {
            return (None, stats);
        }

        let mut g_scores = Array2::from_elem((rows, cols), usize::MAX);
        let mut parents: ParentMap = Array2::from_elem((rows, cols), None);
        let mut closed = VisitedSet::new(rows, cols);
        let mut open = BinaryHeap::new();

        if let Some(g) = g_scores.get_mut([start.row, start.col]) {
            *g = 0;
        }
        open.push(OpenEntry {
            f_score: start.manhattan(goal),
            g_score: 0,
            position: start.row_col(),
        });

        while let Some(entry) = open.pop() {
            let (row, col) = entry.position;
            if !closed.insert(row, col) {
                continue;
            }
            stats.expanded += 1;

            if entry.position == goal.row_col() {
                return (Some(reconstruct_path(&parents, goal)), stats);
            }

            let tentative = entry.g_score + 1;
            for (next_row, next_col) in grid.orthogonal_neighbours(row, col) {
                if closed.contains(next_row, next_col) || !is_passable(grid, next_row, next_col) {
                    continue;
                }

                let improved = g_scores
                    .get_mut([next_row, next_col])
                    .filter(|known| tentative < **known)
                    .map(|known| *known = tentative)
                    .is_some();
                if !improved {
                    continue;
                }

                if let Some(parent) = parents.get_mut([next_row, next_col]) {
                    *parent = Some((row, col));
                }
                let next = AlgoPoint::new(next_col, next_row);
                open.push(OpenEntry {
                    f_score: tentative + next.manhattan(goal),
                    g_score: tentative,
                    position: (next_row, next_col),
                });
            }
        }

        (None, stats)
    }
}

impl Engine for AStarPathfinder {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::PathAStar
    }

    fn run(&self, grid: &Grid, _options: &RunOptions) -> Result<AlgorithmResult> {
        let Some((start, goal)) = find_endpoints(grid) else {
            debug!(rows = grid.rows(), cols = grid.cols(), "A* found fewer than two red cells");
            return Ok(AlgorithmResult::failure(MESSAGE_NO_ENDPOINTS));
        };

        let (path, stats) = Self::search(grid, start, goal);
        debug!(
            %start,
            %goal,
            expanded = stats.expanded,
            found = path.is_some(),
            "A* search finished"
        );

        Ok(path.map_or_else(
            || AlgorithmResult::failure(MESSAGE_NO_PATH),
            |points| AlgorithmResult::success(ResultData::Path(points)),
        ))
    }
}
