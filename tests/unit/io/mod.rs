mod error;
mod image;
mod overlay;
