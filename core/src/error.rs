//! Error types for the core crate
//!
//! The reducer and normalizer are total, so errors here only come from
//! loading and saving configuration or decoding payloads.

use thiserror::Error;
use std::io;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for the core crate
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let core_err: CoreError = io_err.into();
        match core_err {
            CoreError::IoError(_) => {}
            _ => panic!("Expected IoError variant"),
        }

        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let core_err: CoreError = json_err.into();
        match core_err {
            CoreError::JsonError(_) => {}
            _ => panic!("Expected JsonError variant"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = CoreError::ConfigError("max_attempts must be at least 1".to_string());
        assert_eq!(err.to_string(), "Configuration error: max_attempts must be at least 1");
    }
}
