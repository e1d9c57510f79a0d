//! Error types for modelprep operations.
//!
//! This module defines [`PrepError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PrepError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PrepError::Other`) for unexpected errors
//! - Per-artifact download failures are NOT errors: the hub layer reports
//!   them as a [`crate::hub::FetchOutcome`] so callers must handle both
//!   cases explicitly

use thiserror::Error;

/// Core error type for modelprep operations.
#[derive(Debug, Error)]
pub enum PrepError {
    /// The runtime probe could not be executed or produced unusable output.
    #[error("Runtime probe failed: {message}")]
    ProbeFailed { message: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for modelprep operations.
pub type Result<T> = std::result::Result<T, PrepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_failed_displays_message() {
        let err = PrepError::ProbeFailed {
            message: "python3 not found".into(),
        };
        assert!(err.to_string().contains("python3 not found"));
    }

    #[test]
    fn client_build_displays_message() {
        let err = PrepError::ClientBuild {
            message: "bad TLS backend".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("HTTP client"));
        assert!(msg.contains("bad TLS backend"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PrepError = io_err.into();
        assert!(matches!(err, PrepError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: PrepError = anyhow::anyhow!("unexpected").into();
        assert!(matches!(err, PrepError::Other(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PrepError::ProbeFailed {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
