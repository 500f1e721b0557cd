//! Result type alias for DataDefender

use super::errors::DefenderError;

/// Result type alias for DataDefender operations
///
/// Convenience alias using `DefenderError` as the error type. Use this
/// throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, DefenderError>;
