//! Frame capture and GIF generation for automaton runs

use std::path::Path;

use image::Frame;

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{AlgorithmError, Result, malformed_grid};
use crate::io::image::render_grid;
use crate::spatial::Grid;

/// Captures successive grids for visualization
///
/// Every captured grid must share the dimensions of the first one.
pub struct GenerationCapture {
    generations: Vec<Grid>,
    cell_size: u32,
}

impl GenerationCapture {
    /// Empty capture rendering each cell as `cell_size` pixels
    pub const fn new(cell_size: u32) -> Self {
        Self {
            generations: Vec::new(),
            cell_size,
        }
    }

    /// Append a generation
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::MalformedGrid`] if the grid's dimensions differ
    /// from previously captured generations
    pub fn record(&mut self, grid: &Grid) -> Result<()> {
        if let Some(first) = self.generations.first()
            && first.dimensions() != grid.dimensions()
        {
            return Err(malformed_grid(&format!(
                "generation is {:?}, capture is {:?}",
                grid.dimensions(),
                first.dimensions()
            )));
        }
        self.generations.push(grid.clone());
        Ok(())
    }

    /// Number of captured generations
    pub fn generation_count(&self) -> usize {
        self.generations.len()
    }

    /// Export the captured generations as an animated GIF
    ///
    /// Delays shorter than viewers reliably honour are raised to
    /// `VIEWER_MIN_FRAME_DELAY_MS`. The last frame is held five times longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No generations were captured
    /// - Rendering a frame fails
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.generations.is_empty() {
            return Err(AlgorithmError::InvalidSourceData {
                reason: "No generations captured for visualization".to_string(),
            });
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let last_index = self.generations.len() - 1;
        let frames = self
            .generations
            .iter()
            .enumerate()
            .map(|(index, grid)| {
                let hold = if index == last_index { 5 } else { 1 };
                render_grid(grid, None, self.cell_size).map(|img| {
                    Frame::from_parts(
                        img,
                        0,
                        0,
                        image::Delay::from_numer_denom_ms(delay_ms * hold, 1),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
