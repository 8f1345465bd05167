//! Error types.
//!
//! `AppError` is the process boundary: it carries the exit code and the message
//! printed by `main`. Module-level failures are typed enums that convert into it.

use thiserror::Error;

use crate::io::ingest::DataLoadError;

/// Failure of the Lagrange estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterpolationError {
    /// Fewer than two known observations were available.
    #[error("not enough data points for interpolation ({known} known, need at least 2)")]
    InsufficientData { known: usize },
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<DataLoadError> for AppError {
    fn from(err: DataLoadError) -> Self {
        AppError::new(2, format!("Could not read data: {err}"))
    }
}

impl From<InterpolationError> for AppError {
    fn from(err: InterpolationError) -> Self {
        AppError::new(3, format!("Interpolation failed: {err}"))
    }
}
