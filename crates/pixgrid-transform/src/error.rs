//! Error types for pixgrid-transform

use thiserror::Error;

/// Errors that can occur during grid transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error (shape precondition violated)
    #[error("core error: {0}")]
    Core(#[from] pixgrid_core::Error),

    /// An input grid had no rows
    #[error("empty input grid: {0}")]
    EmptyInput(&'static str),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
