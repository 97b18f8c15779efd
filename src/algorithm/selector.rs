//! Closed set of algorithms and the mapping from user-facing identifiers
//!
//! Both the localized display labels and the stable codes are accepted. An
//! unrecognised identifier yields `None`; no fallback engine is substituted.

use std::fmt;

use crate::algorithm::astar::AStarPathfinder;
use crate::algorithm::engine::Engine;
use crate::algorithm::gomoku::GomokuAdvisor;
use crate::algorithm::life::GameOfLife;
use crate::algorithm::maze::MazeGenerator;
use crate::algorithm::solver::MazeSolver;

/// Every algorithm the crate can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// A* between two red cells
    PathAStar,
    /// Five-in-a-row move suggestion
    GomokuAi,
    /// One Game of Life generation
    GameOfLife,
    /// Recursive-backtracker maze
    MazeGen,
    /// Breadth-first maze solving
    MazeSolveBfs,
    /// Depth-first maze solving
    MazeSolveDfs,
}

impl AlgorithmKind {
    /// All algorithms in menu order
    pub const ALL: [Self; 6] = [
        Self::PathAStar,
        Self::GomokuAi,
        Self::GameOfLife,
        Self::MazeGen,
        Self::MazeSolveBfs,
        Self::MazeSolveDfs,
    ];

    /// Resolve a display label or stable code
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "A*路径搜索" | "PATH_ASTAR" => Some(Self::PathAStar),
            "五子棋AI" | "GOMOKU_AI" => Some(Self::GomokuAi),
            "生命游戏" | "GAME_OF_LIFE" => Some(Self::GameOfLife),
            "迷宫生成" | "MAZE_GEN_PRIMS" => Some(Self::MazeGen),
            "MAZE_SOLVE_BFS" => Some(Self::MazeSolveBfs),
            "MAZE_SOLVE_DFS" => Some(Self::MazeSolveDfs),
            _ => None,
        }
    }

    /// Stable machine-readable code
    pub const fn code(self) -> &'static str {
        match self {
            Self::PathAStar => "PATH_ASTAR",
            Self::GomokuAi => "GOMOKU_AI",
            Self::GameOfLife => "GAME_OF_LIFE",
            // Historical code, the generator is a recursive backtracker
            Self::MazeGen => "MAZE_GEN_PRIMS",
            Self::MazeSolveBfs => "MAZE_SOLVE_BFS",
            Self::MazeSolveDfs => "MAZE_SOLVE_DFS",
        }
    }

    /// Display label shown in the algorithm picker
    ///
    /// The solvers have no localized label and fall back to their code.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PathAStar => "A*路径搜索",
            Self::GomokuAi => "五子棋AI",
            Self::GameOfLife => "生命游戏",
            Self::MazeGen => "迷宫生成",
            Self::MazeSolveBfs | Self::MazeSolveDfs => self.code(),
        }
    }

    /// Freshly constructed engine for this algorithm
    pub fn engine(self) -> Box<dyn Engine> {
        match self {
            Self::PathAStar => Box::new(AStarPathfinder),
            Self::GomokuAi => Box::new(GomokuAdvisor),
            Self::GameOfLife => Box::new(GameOfLife),
            Self::MazeGen => Box::new(MazeGenerator),
            Self::MazeSolveBfs => Box::new(MazeSolver::breadth_first()),
            Self::MazeSolveDfs => Box::new(MazeSolver::depth_first()),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Engine for a display label or stable code, `None` if unknown
pub fn create_engine(identifier: &str) -> Option<Box<dyn Engine>> {
    AlgorithmKind::from_identifier(identifier).map(AlgorithmKind::engine)
}
