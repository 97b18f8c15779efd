//! One-ply five-in-a-row move suggestion
//!
//! Every empty cell is scored by the runs of stones it would extend in the four
//! line directions, for both sides. There is no lookahead.

use tracing::debug;

use crate::algorithm::engine::{AlgorithmResult, Engine, ResultData, RunOptions};
use crate::algorithm::selector::AlgorithmKind;
use crate::io::configuration::{AI_RUN_WEIGHT, MESSAGE_BOARD_FULL, OPPONENT_RUN_WEIGHT};
use crate::io::error::Result;
use crate::spatial::{AlgoPoint, CellState, Grid};

/// Horizontal, vertical and both diagonals as `(d_row, d_col)`
pub const LINE_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Count stones of `stone` adjacent to `(row, col)` along one line, both ways
///
/// The cell itself is not counted.
pub fn count_consecutive(
    grid: &Grid,
    row: usize,
    col: usize,
    direction: (isize, isize),
    stone: CellState,
) -> u32 {
    let backward = (-direction.0, -direction.1);
    [direction, backward]
        .into_iter()
        .map(|step| {
            let mut count = 0_u32;
            let mut cursor = grid.offset(row, col, step);
            while let Some((r, c)) = cursor {
                if grid.get(r, c) != Some(stone) {
                    break;
                }
                count += 1;
                cursor = grid.offset(r, c, step);
            }
            count
        })
        .sum()
}

/// Heuristic value of playing at `(row, col)`
pub fn score_cell(grid: &Grid, row: usize, col: usize, ai: CellState, opponent: CellState) -> u32 {
    LINE_DIRECTIONS
        .iter()
        .map(|&direction| {
            count_consecutive(grid, row, col, direction, ai) * AI_RUN_WEIGHT
                + count_consecutive(grid, row, col, direction, opponent) * OPPONENT_RUN_WEIGHT
        })
        .sum()
}

/// Adversarial move suggester
#[derive(Debug, Clone, Copy, Default)]
pub struct GomokuAdvisor;

impl GomokuAdvisor {
    /// Best empty cell for `ai` against `opponent`, earliest in row-major order on ties
    pub fn best_move(grid: &Grid, ai: CellState, opponent: CellState) -> Option<(AlgoPoint, u32)> {
        let mut best: Option<(AlgoPoint, u32)> = None;
        for ((row, col), state) in grid.cells() {
            if state != CellState::Empty {
                continue;
            }
            let score = score_cell(grid, row, col, ai, opponent);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((AlgoPoint::new(col, row), score));
            }
        }
        best
    }
}

impl Engine for GomokuAdvisor {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::GomokuAi
    }

    fn run(&self, grid: &Grid, options: &RunOptions) -> Result<AlgorithmResult> {
        let ai = options.turn.stone();
        let opponent = options.turn.opponent().stone();

        let Some((point, score)) = Self::best_move(grid, ai, opponent) else {
            debug!(turn = ?options.turn, "no empty cell to play");
            return Ok(AlgorithmResult::failure(MESSAGE_BOARD_FULL));
        };

        debug!(turn = ?options.turn, %point, score, "move suggested");
        Ok(AlgorithmResult::success(ResultData::Move(point)))
    }
}
