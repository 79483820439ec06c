//! Error types for windowed statistics
//!
//! Provides the error type shared by the engine and the crates built on it.

use thiserror::Error;

/// Core error type for windowed statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Buffer allocation or growth failed
    #[error("Memory error: {0}")]
    Memory(String),

    /// The context was torn down and can no longer accept observations
    #[error("Statistics context has been released")]
    ContextReleased,

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a failed allocation of `capacity` slots
    pub fn allocation(capacity: usize) -> Self {
        Self::Memory(format!("failed to allocate buffer of {capacity} values"))
    }

    /// Whether the error was caused by the caller rather than by the allocator
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidParameter(_) | Self::ContextReleased)
    }
}
