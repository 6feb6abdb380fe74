//! Unified error type exposed by **`expert-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up, which keeps the surface small for callers.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ExpertError>;

#[derive(Debug, Error)]
pub enum ExpertError {
    /// Backend-specific error that doesn't fit another category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The request cannot be expressed for the selected backend.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration problem, e.g. a missing credential.
    #[error("invalid: {0}")]
    Invalid(String),
}
