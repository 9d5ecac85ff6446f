//! Person error types.

use splitter_shared::{AppError, FieldErrors};
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during person operations.
#[derive(Debug, Error)]
pub enum PersonError {
    /// Request payload failed shape validation.
    #[error("invalid person: {0:?}")]
    Invalid(FieldErrors),

    /// Person not found.
    #[error("Person not found with id: {0}")]
    NotFound(String),

    /// Another person already uses the email.
    #[error("Email already exists")]
    EmailExists,

    /// Storage failure.
    #[error("repository error: {0}")]
    Store(#[from] StoreError),
}

impl PersonError {
    /// Creates a not found error for a client-supplied id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }
}

impl From<PersonError> for AppError {
    fn from(err: PersonError) -> Self {
        match err {
            PersonError::Invalid(errors) => Self::Validation(errors),
            PersonError::NotFound(_) => Self::NotFound(err.to_string()),
            PersonError::EmailExists => Self::Conflict(err.to_string()),
            PersonError::Store(e) => Self::Database(e.to_string()),
        }
    }
}
