//! Error types for window-functions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Statistics engine error: {0}")]
    Core(#[from] window_core::Error),

    #[error("Statistics functions require exactly {expected} argument, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Registration failed: {0}")]
    Registration(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors caused by how the function was called
    pub fn is_usage_error(&self) -> bool {
        match self {
            Error::Core(inner) => inner.is_usage_error(),
            Error::ArgumentCount { .. }
            | Error::TypeMismatch { .. }
            | Error::UnknownFunction(_) => true,
            Error::Registration(_) => false,
        }
    }

    /// Buffer allocation or growth failed
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Error::Core(window_core::Error::Memory(_)))
    }
}
