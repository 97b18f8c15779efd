//! Tests for error display and sources

#[cfg(test)]
mod tests {
    use gridalgo::AlgorithmError;
    use gridalgo::io::error::{invalid_parameter, malformed_grid};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests messages name the offending parameter and value
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("cell_size", &0, &"must be at least one pixel");

        assert_eq!(
            error.to_string(),
            "Invalid parameter 'cell_size' = '0': must be at least one pixel"
        );
        assert!(error.source().is_none());
    }

    // Tests shape and identifier errors render their detail
    // Verified by dropping the reason from the message
    #[test]
    fn test_display_variants() {
        assert_eq!(
            malformed_grid(&"rows differ").to_string(),
            "Malformed grid: rows differ"
        );
        let unsupported = AlgorithmError::UnsupportedAlgorithm {
            identifier: "X".to_string(),
        };
        assert_eq!(unsupported.to_string(), "Unsupported algorithm 'X'");
    }

    // Tests file system errors expose their cause
    // Verified by returning None from source
    #[test]
    fn test_file_system_source() {
        let error = AlgorithmError::FileSystem {
            path: PathBuf::from("grid.txt"),
            operation: "read grid",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read grid on 'grid.txt'"));
    }
}
