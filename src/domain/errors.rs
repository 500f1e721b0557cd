//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main DataDefender error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific failure classes and provides context for error handling.
#[derive(Debug, Error)]
pub enum DefenderError {
    /// Configuration / property-file errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Another process already holds the named instance lock
    #[error("Another instance of {0} is already active")]
    AlreadyRunning(String),

    /// Instance lock errors other than contention
    #[error("Instance lock error: {0}")]
    Lock(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(String),

    /// Discovery process errors
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// Anonymization process errors
    #[error("Anonymization error: {0}")]
    Anonymization(String),

    /// Data generation errors
    #[error("Generation error: {0}")]
    Generation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DefenderError {
    fn from(err: std::io::Error) -> Self {
        DefenderError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DefenderError {
    fn from(err: serde_json::Error) -> Self {
        DefenderError::Serialization(err.to_string())
    }
}

impl From<tokio_postgres::Error> for DefenderError {
    fn from(err: tokio_postgres::Error) -> Self {
        DefenderError::Database(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for DefenderError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        DefenderError::Database(format!("Failed to get connection from pool: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defender_error_display() {
        let err = DefenderError::Configuration("Invalid property file".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid property file"
        );
    }

    #[test]
    fn test_already_running_display() {
        let err = DefenderError::AlreadyRunning("DataDefender".to_string());
        assert_eq!(
            err.to_string(),
            "Another instance of DataDefender is already active"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: DefenderError = io_err.into();
        assert!(matches!(err, DefenderError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: DefenderError = json_err.into();
        assert!(matches!(err, DefenderError::Serialization(_)));
    }

    #[test]
    fn test_defender_error_implements_std_error() {
        let err = DefenderError::Discovery("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
