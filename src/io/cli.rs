//! Command-line interface for running one engine over a grid file

use crate::algorithm::engine::{AlgorithmResult, Player, ResultData, RunOptions};
use crate::algorithm::life::GameOfLife;
use crate::algorithm::selector::AlgorithmKind;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_GENERATIONS, DEFAULT_SEED, GIF_FRAME_DELAY_MS,
};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::matrix::{format_grid, load_grid};
use crate::io::progress::GenerationProgress;
use crate::io::visualization::GenerationCapture;
use crate::spatial::{CellState, Grid};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// Side to move, as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TurnArg {
    /// Black stones
    Black,
    /// Red stones
    Red,
}

impl From<TurnArg> for Player {
    fn from(turn: TurnArg) -> Self {
        match turn {
            TurnArg::Black => Self::Black,
            TurnArg::Red => Self::Red,
        }
    }
}

#[derive(Parser)]
#[command(name = "gridalgo")]
#[command(author, version, about = "Run a grid algorithm over a sampled board")]
/// Command-line arguments for the grid algorithm runner
pub struct Cli {
    /// Grid file: one row per line, comma-separated cell codes 0-3
    #[arg(value_name = "GRID_FILE")]
    pub target: PathBuf,

    /// Algorithm label or code (e.g. PATH_ASTAR, GOMOKU_AI, GAME_OF_LIFE, MAZE_GEN_PRIMS)
    #[arg(short, long)]
    pub algorithm: String,

    /// Random seed for reproducible maze generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Side the move suggester plays for
    #[arg(short, long, value_enum, default_value_t = TurnArg::Black)]
    pub turn: TurnArg,

    /// Number of Game of Life generations to compute
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: usize,

    /// Write the result rendered over the grid as PNG
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the input and every produced grid as an animated GIF
    #[arg(long)]
    pub animate: Option<PathBuf>,

    /// Edge length of one cell in exported images (pixels)
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine options derived from the arguments
    pub fn run_options(&self) -> RunOptions {
        RunOptions::default()
            .with_turn(self.turn.into())
            .with_seed(self.seed)
    }

    /// Resolve the requested algorithm
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::UnsupportedAlgorithm`] for unknown identifiers
    pub fn algorithm_kind(&self) -> Result<AlgorithmKind> {
        AlgorithmKind::from_identifier(&self.algorithm).ok_or_else(|| {
            AlgorithmError::UnsupportedAlgorithm {
                identifier: self.algorithm.clone(),
            }
        })
    }
}

/// Loads the grid, runs the engine and writes requested exports
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected engine on the target grid file
    ///
    /// # Errors
    ///
    /// Returns an error if the algorithm is unknown, the grid cannot be
    /// loaded, the engine rejects the grid, or an export fails
    pub fn execute(&self) -> Result<AlgorithmResult> {
        let kind = self.cli.algorithm_kind()?;
        let grid = load_grid(&self.cli.target)?;
        info!(
            algorithm = %kind,
            rows = grid.rows(),
            cols = grid.cols(),
            "running engine"
        );

        let mut capture = self
            .cli
            .animate
            .as_ref()
            .map(|_| GenerationCapture::new(self.cli.cell_size));
        if let Some(capture) = capture.as_mut() {
            capture.record(&grid)?;
        }

        let result = if kind == AlgorithmKind::GameOfLife {
            self.evolve(&grid, capture.as_mut())?
        } else {
            let result = kind.engine().run(&grid, &self.cli.run_options())?;
            if let (Some(capture), Some(produced)) = (capture.as_mut(), result.grid()) {
                capture.record(produced)?;
            }
            result
        };

        if let Some(path) = &self.cli.output {
            export_grid_as_png(&grid, result.data(), self.cli.cell_size, path)?;
            info!(path = %path.display(), "image written");
        }

        if let (Some(path), Some(capture)) = (&self.cli.animate, &capture) {
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
            info!(
                path = %path.display(),
                frames = capture.generation_count(),
                "animation written"
            );
        }

        Ok(result)
    }

    fn evolve(
        &self,
        grid: &Grid,
        mut capture: Option<&mut GenerationCapture>,
    ) -> Result<AlgorithmResult> {
        let generations = self.cli.generations;
        let progress = GenerationProgress::for_run(generations, !self.cli.should_show_progress());

        let mut last = None;
        for generation in GameOfLife::evolve(grid, generations) {
            if let Some(capture) = capture.as_deref_mut() {
                capture.record(&generation)?;
            }
            progress.advance();
            last = Some(generation);
        }
        progress.finish();

        let Some(last) = last else {
            return Err(invalid_parameter(
                "generations",
                &generations,
                &"must be at least 1",
            ));
        };
        info!(
            generations,
            alive = last.count(CellState::Black),
            "automaton evolved"
        );
        Ok(AlgorithmResult::success(ResultData::Grid(last)))
    }
}

/// Human-readable summary of a result for terminal output
pub fn describe(kind: AlgorithmKind, result: &AlgorithmResult) -> String {
    match result.data() {
        None => format!("{kind}: failed: {}", result.message()),
        Some(ResultData::Path(points)) => {
            let route = points
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" -> ");
            format!(
                "{kind}: {} moves\n{route}",
                points.len().saturating_sub(1)
            )
        }
        Some(ResultData::Move(point)) => format!("{kind}: move {point}"),
        Some(ResultData::Grid(grid)) => format!("{kind}:\n{}", format_grid(grid)),
    }
}
