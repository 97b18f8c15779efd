//! Translation of engine payloads into drawable primitives

use crate::algorithm::engine::ResultData;
use crate::math::interpolation::Quad;
use crate::spatial::Grid;

/// Primitive a renderer can draw over the camera preview
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// Connected line through cell centres
    Polyline(Vec<[f64; 2]>),
    /// Highlight at a single cell centre
    Marker([f64; 2]),
    /// Whole grid to be drawn cell by cell
    Cells(Grid),
}

/// Map a payload onto a `rows × cols` board occupying `quad`
pub fn to_drawable(data: &ResultData, quad: &Quad, rows: usize, cols: usize) -> Drawable {
    match data {
        ResultData::Path(points) => Drawable::Polyline(
            points
                .iter()
                .map(|&point| quad.cell_center(point, rows, cols))
                .collect(),
        ),
        ResultData::Move(point) => Drawable::Marker(quad.cell_center(*point, rows, cols)),
        ResultData::Grid(grid) => Drawable::Cells(grid.clone()),
    }
}
