/// A* pathfinding between red endpoints
pub mod astar;
/// Engine contract, result types and run options
pub mod engine;
/// One-ply five-in-a-row move suggestion
pub mod gomoku;
/// Game of Life stepping
pub mod life;
/// Recursive-backtracker maze generation
pub mod maze;
/// Algorithm identifiers and engine construction
pub mod selector;
/// Breadth-first and depth-first maze solving
pub mod solver;

pub use engine::{AlgorithmResult, Engine, Player, ResultData, RunOptions};
pub use selector::{AlgorithmKind, create_engine};
