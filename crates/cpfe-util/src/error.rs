//! Core error types for the cpfe-util crate.

use thiserror::Error;

/// Error type for diagnostic construction and reporting.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Failed to format a diagnostic for output.
    #[error("failed to format diagnostic: {0}")]
    FormatFailed(String),

    /// A diagnostic code did not match any known code.
    #[error("invalid diagnostic code: {0}")]
    InvalidCode(String),
}

/// Result type alias for diagnostic operations.
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
