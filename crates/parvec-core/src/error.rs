//! Error types for buffer and reduction operations
//!
//! Provides a unified error type for all parvec crates.

use thiserror::Error;

/// Core error type for buffer and reduction operations
#[derive(Error, Debug)]
pub enum Error {
    /// Read-type operation attempted on a buffer that was never initialized
    #[error("Buffer is not initialized")]
    UninitializedBuffer,

    /// Worker count that cannot partition anything
    #[error("Invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(usize),

    /// Element access outside the buffer's fixed length
    #[error("Index {index} out of range for buffer of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Two-buffer operation across different lengths
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an out-of-range index access
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for an operation with no result on empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidParameter(format!("{operation} is undefined for an empty buffer"))
    }

    /// Create an error for an invalid fill range
    pub fn invalid_range(min: f64, max: f64) -> Self {
        Self::InvalidParameter(format!("Fill range [{min}, {max}) is empty or non-finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UninitializedBuffer;
        assert_eq!(err.to_string(), "Buffer is not initialized");

        let err = Error::InvalidWorkerCount(0);
        assert_eq!(
            err.to_string(),
            "Invalid worker count: 0 (must be at least 1)"
        );

        let err = Error::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(
            err.to_string(),
            "Index 7 out of range for buffer of length 4"
        );

        let err = Error::size_mismatch(100, 50, "dot product");
        assert_eq!(
            err.to_string(),
            "Size mismatch in dot product: expected 100, got 50"
        );

        let err = Error::InvalidParameter("seed required".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: seed required");

        let err = Error::Execution("thread pool exhausted".to_string());
        assert_eq!(err.to_string(), "Execution error: thread pool exhausted");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::index_out_of_range(10, 3);
        match err {
            Error::IndexOutOfRange { index, len } => {
                assert_eq!(index, 10);
                assert_eq!(len, 3);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::empty_input("min");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: min is undefined for an empty buffer"
        );

        let err = Error::invalid_range(5.0, 5.0);
        assert!(err.to_string().contains("[5, 5)"));
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {
                assert!(err.to_string().contains("file not found"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::InvalidWorkerCount(0))
            }
        }

        assert_eq!(test_function(true).unwrap(), 42);
        assert!(test_function(false).is_err());
    }

    #[test]
    fn test_error_patterns() {
        // Pattern: guard a worker count before spawning anything
        fn check_workers(workers: usize) -> Result<()> {
            if workers == 0 {
                return Err(Error::InvalidWorkerCount(workers));
            }
            Ok(())
        }

        assert!(check_workers(0).is_err());
        assert!(check_workers(1).is_ok());

        // Pattern: bounds-check an index
        fn check_index(index: usize, len: usize) -> Result<()> {
            if index >= len {
                return Err(Error::index_out_of_range(index, len));
            }
            Ok(())
        }

        assert!(check_index(3, 4).is_ok());
        assert!(check_index(4, 4).is_err());
    }
}
