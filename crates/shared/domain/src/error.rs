//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier could not be interpreted as an integer
    #[error("Invalid user id: {0:?}")]
    InvalidId(String),
}

impl DomainError {
    /// Create an invalid id error
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        DomainError::InvalidId(raw.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
