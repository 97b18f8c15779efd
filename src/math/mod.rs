/// Bilinear interpolation inside the board quadrilateral
pub mod interpolation;

pub use interpolation::Quad;
