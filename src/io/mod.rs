//! Input/output operations, configuration and error handling
//!
//! This module contains:
//! - The crate error type and configuration constants
//! - The plain-text grid codec
//! - Result overlays, PNG and GIF export
//! - The command-line front end and its progress display

/// Command-line argument parsing and the engine runner
pub mod cli;
/// Algorithm constants and output defaults
pub mod configuration;
/// Error types for hard failures
pub mod error;
/// PNG rendering of grids and result overlays
pub mod image;
/// Plain-text grid codec
pub mod matrix;
/// Result payloads as drawable primitives
pub mod overlay;
/// Progress display for automaton runs
pub mod progress;
/// Animated GIF capture of automaton generations
pub mod visualization;
