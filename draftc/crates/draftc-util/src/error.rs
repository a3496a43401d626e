//! Core error types for draftc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// A code string that is not of the form `E1234` / `W1234`
    #[error("Invalid diagnostic code: {0}")]
    InvalidCode(String),
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
