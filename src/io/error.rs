//! Error types for hard failures outside the engines' modeled outcomes
//!
//! Expected engine outcomes such as "no path" or "board full" are reported through
//! [`crate::algorithm::engine::AlgorithmResult`] and never reach this type.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Grid input is empty or its rows have differing lengths
    MalformedGrid {
        /// Description of the shape problem
        reason: String,
    },

    /// Source data could not be interpreted
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter or engine precondition validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Algorithm identifier is not known to the selector
    UnsupportedAlgorithm {
        /// The identifier that was requested
        identifier: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGrid { reason } => {
                write!(f, "Malformed grid: {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnsupportedAlgorithm { identifier } => {
                write!(f, "Unsupported algorithm '{identifier}'")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed grid error
pub fn malformed_grid(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::MalformedGrid {
        reason: reason.to_string(),
    }
}
