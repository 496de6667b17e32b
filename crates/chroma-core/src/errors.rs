//! Error types for Chroma.

use thiserror::Error;

/// Unified error type for all Chroma operations.
///
/// Provides structured, actionable error messages with context.
#[derive(Error, Debug)]
pub enum ChromaError {
    /// Configuration errors (thread counts, paths, flag combinations)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input validation errors (vertex index out of range, malformed store use)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// I/O errors (edge-list reading, report writing)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic errors (fallback)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChromaError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ChromaError::ConfigError(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ChromaError::ValidationError(message.into())
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ChromaError::Internal(message.into())
    }
}

/// Result type alias for Chroma operations.
pub type Result<T> = std::result::Result<T, ChromaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let config_err = ChromaError::config("Invalid thread count");
        assert!(matches!(config_err, ChromaError::ConfigError(_)));

        let validation_err = ChromaError::validation("Vertex 10 out of range");
        assert!(matches!(validation_err, ChromaError::ValidationError(_)));

        let internal_err = ChromaError::internal("unreachable state");
        assert!(matches!(internal_err, ChromaError::Internal(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ChromaError = io.into();
        assert!(matches!(err, ChromaError::IoError(_)));
        assert!(err.to_string().contains("I/O error"));
    }
}
