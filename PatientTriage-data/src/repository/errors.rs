use std::sync::PoisonError;
use thiserror::Error;

/// Error type for diagnostic log operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),
}

impl<T> From<PoisonError<T>> for LogError {
    fn from(error: PoisonError<T>) -> Self {
        LogError::Lock(error.to_string())
    }
}
