//! Error types for notbox
//!
//! Provides a unified error type for all notbox crates. Configuration
//! errors are raised before anything is drawn; statistical degeneracy is
//! never an error and propagates as NaN instead.

use thiserror::Error;

/// Core error type for notbox operations
#[derive(Error, Debug)]
pub enum Error {
    /// Group key length does not match the sample columns (or observations
    /// when the samples are a flat vector)
    #[error("Key length mismatch: got {keys} keys, expected {expected}")]
    KeyLengthMismatch { keys: usize, expected: usize },

    /// Unrecognized style token
    #[error("Unknown style '{0}': expected one of patch, line, sdline")]
    UnknownStyle(String),

    /// Unrecognized interval token
    #[error("Unknown interval '{0}': expected one of SEM, tInterval")]
    UnknownInterval(String),

    /// Unrecognized keyword option
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    /// Legacy positional arguments mixed with keyword options
    #[error("Conflicting calling conventions: {0}")]
    ConflictingConventions(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The host drawing surface rejected a primitive
    #[error("Canvas error: {0}")]
    Canvas(String),

    /// IO error (for file output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a size mismatch between two inputs
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a negative or non-finite jitter magnitude
    pub fn invalid_jitter(jitter: f64) -> Self {
        Self::InvalidParameter(format!(
            "Jitter {jitter} must be a finite, non-negative number"
        ))
    }

    /// Whether this error describes a malformed call rather than a runtime failure
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::KeyLengthMismatch { .. }
                | Self::UnknownStyle(_)
                | Self::UnknownInterval(_)
                | Self::UnknownOption(_)
                | Self::ConflictingConventions(_)
                | Self::InvalidParameter(_)
                | Self::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::KeyLengthMismatch { keys: 2, expected: 3 };
        assert_eq!(err.to_string(), "Key length mismatch: got 2 keys, expected 3");

        let err = Error::UnknownStyle("boxes".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown style 'boxes': expected one of patch, line, sdline"
        );

        let err = Error::UnknownInterval("bootstrap".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown interval 'bootstrap': expected one of SEM, tInterval"
        );

        let err = Error::UnknownOption("colour".to_string());
        assert_eq!(err.to_string(), "Unknown option 'colour'");

        let err = Error::Canvas("surface closed".to_string());
        assert_eq!(err.to_string(), "Canvas error: surface closed");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::size_mismatch(13, 12, "group keys");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in group keys: expected 13, got 12"
        );

        let err = Error::invalid_jitter(-0.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Jitter -0.5 must be a finite, non-negative number"
        );
    }

    #[test]
    fn test_configuration_classification() {
        assert!(Error::KeyLengthMismatch { keys: 1, expected: 2 }.is_configuration());
        assert!(Error::ConflictingConventions("x".into()).is_configuration());
        assert!(Error::invalid_jitter(f64::NAN).is_configuration());
        assert!(!Error::Canvas("x".into()).is_configuration());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!Error::from(io).is_configuration());
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
}
