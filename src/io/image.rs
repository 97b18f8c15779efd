//! PNG export of grids with optional result overlays

use std::collections::HashSet;
use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::algorithm::engine::ResultData;
use crate::io::configuration::{CELL_COLORS, MOVE_COLOR, PATH_COLOR};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::{AlgoPoint, Grid};

fn image_extent(cells: usize, cell_size: u32, parameter: &'static str) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|count| count.checked_mul(cell_size))
        .ok_or_else(|| invalid_parameter(parameter, &cells, &"image would exceed u32 pixels"))
}

/// Render `grid` as blocks of `cell_size` pixels
///
/// A `Grid` overlay replaces the drawn grid, a `Path` overlay tints every cell
/// on the route and a `Move` overlay tints the suggested cell.
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero
/// - The grid has no cells
/// - The image dimensions overflow `u32`
pub fn render_grid(
    grid: &Grid,
    overlay: Option<&ResultData>,
    cell_size: u32,
) -> Result<RgbaImage> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be at least one pixel",
        ));
    }

    let (base, highlights, tint): (&Grid, HashSet<AlgoPoint>, [u8; 4]) = match overlay {
        Some(ResultData::Grid(replacement)) => (replacement, HashSet::new(), PATH_COLOR),
        Some(ResultData::Path(points)) => (grid, points.iter().copied().collect(), PATH_COLOR),
        Some(ResultData::Move(point)) => (grid, HashSet::from([*point]), MOVE_COLOR),
        None => (grid, HashSet::new(), PATH_COLOR),
    };

    if base.area() == 0 {
        return Err(AlgorithmError::InvalidSourceData {
            reason: "grid has no cells to render".to_string(),
        });
    }

    let width = image_extent(base.cols(), cell_size, "cols")?;
    let height = image_extent(base.rows(), cell_size, "rows")?;
    let mut img = RgbaImage::new(width, height);

    for ((row, col), state) in base.cells() {
        let rgba = if highlights.contains(&AlgoPoint::new(col, row)) {
            tint
        } else {
            CELL_COLORS
                .get(usize::from(state.code()))
                .copied()
                .unwrap_or([0, 0, 0, 0])
        };

        let origin_x = col as u32 * cell_size;
        let origin_y = row as u32 * cell_size;
        for dy in 0..cell_size {
            for dx in 0..cell_size {
                img.put_pixel(origin_x + dx, origin_y + dy, Rgba(rgba));
            }
        }
    }

    Ok(img)
}

/// Export a grid, optionally with a result overlay, as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_grid`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &Grid,
    overlay: Option<&ResultData>,
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_grid(grid, overlay, cell_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
