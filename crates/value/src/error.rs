//! Structural clone error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CloneError {
    #[error("value nesting exceeds maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}
