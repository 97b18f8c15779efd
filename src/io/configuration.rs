//! Algorithm constants and runtime configuration defaults

/// Largest row or column count accepted from grid input
///
/// Keeps loaded boards, and the images rendered from them, to a bounded size.
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Smallest grid the maze generator can carve (border ring plus one cell)
pub const MIN_MAZE_DIMENSION: usize = 3;

// Move suggester weights, defence slightly below attack
/// Score per AI stone in a run through the candidate cell
pub const AI_RUN_WEIGHT: u32 = 10;
/// Score per opponent stone in a run through the candidate cell
pub const OPPONENT_RUN_WEIGHT: u32 = 8;

// Diagnostics attached to failed results
/// Fewer than two red cells on the board
pub const MESSAGE_NO_ENDPOINTS: &str = "no start/goal";
/// Goal is not reachable from the start
pub const MESSAGE_NO_PATH: &str = "no path";
/// No empty cell left to play
pub const MESSAGE_BOARD_FULL: &str = "board full";

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of automaton generations for the CLI
pub const DEFAULT_GENERATIONS: usize = 1;

// Output settings
/// Edge length of one cell in exported images (pixels)
pub const DEFAULT_CELL_SIZE: u32 = 32;
/// Palette indexed by cell code: empty, black, red, blue
pub const CELL_COLORS: [[u8; 4]; 4] = [
    [240, 240, 240, 255],
    [20, 20, 20, 255],
    [220, 40, 40, 255],
    [40, 80, 220, 255],
];
/// Tint for cells on a reported path
pub const PATH_COLOR: [u8; 4] = [250, 200, 30, 255];
/// Tint for a suggested move
pub const MOVE_COLOR: [u8; 4] = [40, 200, 90, 255];
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 250;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
