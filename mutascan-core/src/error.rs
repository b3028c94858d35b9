//! Structured error types for the mutascan workspace.

use thiserror::Error;

/// Unified error type for mutascan operations.
///
/// Scanning itself is total; these variants cover configuration and input
/// handling around it.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ScanError>;
