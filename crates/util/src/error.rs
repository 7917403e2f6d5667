//! Error types for the utilities.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
    #[error("charset must contain at least one character")]
    EmptyCharset,
    #[error("invalid currency code `{0}`")]
    InvalidCurrency(String),
    #[error("no tokio runtime is running")]
    MissingRuntime,
}

/// Failure of [`retry`](crate::retry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RetryError<E> {
    #[error("retry policy allows no attempts")]
    NoAttempts,
    #[error("gave up after {attempts} attempt(s): {last}")]
    Exhausted { attempts: u32, last: E },
}

impl<E> RetryError<E> {
    /// The error of the final attempt, if any attempt ran.
    pub fn into_last(self) -> Option<E> {
        match self {
            RetryError::NoAttempts => None,
            RetryError::Exhausted { last, .. } => Some(last),
        }
    }
}
