//! Plain-text grid codec
//!
//! One row per line, cells as integer codes separated by commas:
//!
//! ```text
//! 2,0,0
//! 1,1,0
//! 0,0,2
//! ```
//!
//! This is the same form used when a grid is forwarded to the assistant.

use std::path::Path;

use crate::io::error::{AlgorithmError, Result, malformed_grid};
use crate::spatial::{CellState, Grid};

/// Parse a grid from its text form
///
/// Blank lines and whitespace around codes are ignored.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidSourceData`] for a cell that is not a known
/// code, [`AlgorithmError::MalformedGrid`] when there are no rows or the rows
/// differ in length, and [`AlgorithmError::InvalidParameter`] when the board
/// exceeds `MAX_GRID_DIMENSION` in either direction
pub fn parse_grid(text: &str) -> Result<Grid> {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(line_index, line)| {
            line.split(',')
                .enumerate()
                .map(|(col_index, token)| parse_cell(token.trim(), line_index, col_index))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    if rows.is_empty() {
        return Err(malformed_grid(&"text holds no rows"));
    }
    Grid::from_rows(rows)
}

fn parse_cell(token: &str, row: usize, col: usize) -> Result<CellState> {
    token
        .parse::<u8>()
        .ok()
        .and_then(|code| CellState::try_from(code).ok())
        .ok_or_else(|| AlgorithmError::InvalidSourceData {
            reason: format!("unrecognised cell '{token}' at row {row}, column {col}"),
        })
}

/// Render a grid in its text form, without a trailing newline
pub fn format_grid(grid: &Grid) -> String {
    grid.to_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|state| state.code().to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read and parse a grid file
///
/// # Errors
///
/// Returns [`AlgorithmError::FileSystem`] if the file cannot be read, or any
/// error from [`parse_grid`]
pub fn load_grid(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).map_err(|e| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "read grid",
        source: e,
    })?;
    parse_grid(&text)
}
