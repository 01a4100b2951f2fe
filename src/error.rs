use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Error taxonomy shared by every demonstration
// =============================================================================

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("Cannot divide {dividend} by zero")]
    DivisionByZero { dividend: i32 },

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: String },

    #[error("Index {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("Slot {index} was read before anything was written to it")]
    UninitializedRead { index: usize },

    #[error("Buffer {id} was used after it had been released")]
    UseAfterRelease { id: String },

    #[error("Buffer {id} was released twice")]
    DoubleRelease { id: String },

    #[error("Bad configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DemoError {
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for the errors that stem from misusing a buffer's lifetime.
    pub fn is_lifecycle_violation(&self) -> bool {
        matches!(
            self,
            DemoError::UseAfterRelease { .. } | DemoError::DoubleRelease { .. }
        )
    }
}

pub type DemoResult<T> = Result<T, DemoError>;
