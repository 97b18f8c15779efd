//! Bilinear mapping from grid space into the board quadrilateral
//!
//! The sampled board rarely appears as an axis-aligned rectangle on screen, so
//! cell positions are placed by interpolating between the four detected corners.

use crate::spatial::AlgoPoint;

/// Linear interpolation between two points
pub fn lerp(from: [f64; 2], to: [f64; 2], t: f64) -> [f64; 2] {
    [
        (to[0] - from[0]).mul_add(t, from[0]),
        (to[1] - from[1]).mul_add(t, from[1]),
    ]
}

/// Board corners in screen space, clockwise from the top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Corner at grid origin
    pub top_left: [f64; 2],
    /// Corner past the last column of the first row
    pub top_right: [f64; 2],
    /// Corner past the last row and column
    pub bottom_right: [f64; 2],
    /// Corner past the last row of the first column
    pub bottom_left: [f64; 2],
}

impl Quad {
    /// Quadrilateral from corners in clockwise order starting top-left
    pub const fn new(corners: [[f64; 2]; 4]) -> Self {
        let [top_left, top_right, bottom_right, bottom_left] = corners;
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Axis-aligned unit square
    pub const fn unit() -> Self {
        Self::new([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
    }

    /// Axis-aligned rectangle of the given size anchored at the origin
    pub const fn rectangle(width: f64, height: f64) -> Self {
        Self::new([[0.0, 0.0], [width, 0.0], [width, height], [0.0, height]])
    }

    /// Point at fractional position `(tx, ty)`, each in `0.0..=1.0` inside the board
    pub fn map(&self, tx: f64, ty: f64) -> [f64; 2] {
        let top = lerp(self.top_left, self.top_right, tx);
        let bottom = lerp(self.bottom_left, self.bottom_right, tx);
        lerp(top, bottom, ty)
    }

    /// Screen position of the centre of a cell on a `rows × cols` board
    pub fn cell_center(&self, point: AlgoPoint, rows: usize, cols: usize) -> [f64; 2] {
        let tx = (point.col as f64 + 0.5) / cols.max(1) as f64;
        let ty = (point.row as f64 + 0.5) / rows.max(1) as f64;
        self.map(tx, ty)
    }
}
