//! Domain errors - Business rule violations raised by books, stores and loans

use thiserror::Error;

/// Domain-specific errors that represent business rule violations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("Book with ISBN {isbn} does not exist")]
    NotFound { isbn: String },

    #[error("Maximum book limit reached ({capacity})")]
    CapacityExceeded { capacity: usize },
}

/// Fieldless view of [`DomainError`] for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
    NotFound,
    CapacityExceeded,
}

impl DomainError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub fn not_found(isbn: impl Into<String>) -> Self {
        Self::NotFound { isbn: isbn.into() }
    }

    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
        }
    }
}
