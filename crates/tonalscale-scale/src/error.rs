//! Error types for tonalscale-scale

use thiserror::Error;

/// Errors that can occur during scaling operations
#[derive(Debug, Error)]
pub enum ScaleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] tonalscale_core::Error),

    /// Invalid scale factor
    #[error("invalid scale factor: {0} (must be >= 1)")]
    InvalidScaleFactor(u32),
}

/// Result type for scaling operations
pub type ScaleResult<T> = Result<T, ScaleError>;
