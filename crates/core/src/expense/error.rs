//! Expense error types.

use splitter_shared::{AppError, FieldErrors};
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during expense operations.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Request payload failed shape validation.
    #[error("invalid expense: {0:?}")]
    Invalid(FieldErrors),

    /// Expense not found.
    #[error("Expense not found with id: {0}")]
    NotFound(String),

    /// Payer or participant does not exist.
    #[error("Person not found with id: {0}")]
    PersonNotFound(String),

    /// Storage failure.
    #[error("repository error: {0}")]
    Store(#[from] StoreError),
}

impl ExpenseError {
    /// Creates a not found error for a client-supplied expense id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Creates a not found error for a referenced person id.
    pub fn person_not_found(id: impl Into<String>) -> Self {
        Self::PersonNotFound(id.into())
    }
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::Invalid(errors) => Self::Validation(errors),
            ExpenseError::NotFound(_) | ExpenseError::PersonNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            ExpenseError::Store(e) => Self::Database(e.to_string()),
        }
    }
}
