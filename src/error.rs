//! Error types for the comfort engine
//!
//! The classification paths are total functions (missing readings map to
//! sentinel tiers, unresolvable venues fall back to a default category), so
//! errors only arise at the edges: invalid arguments and malformed input
//! files in the binary.

use thiserror::Error;

/// Main error type for the comfort engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Engine error: {message}")]
    General { message: String },
}

impl EngineError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let validation_err = EngineError::validation("hour out of range");
        assert!(matches!(validation_err, EngineError::Validation { .. }));
        assert!(validation_err.to_string().contains("hour out of range"));

        let general_err = EngineError::general("something odd");
        assert!(matches!(general_err, EngineError::General { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let engine_err: EngineError = io_err.into();
        assert!(matches!(engine_err, EngineError::Io { .. }));
    }
}
