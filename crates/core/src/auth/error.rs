//! Authentication error types.

use splitter_shared::{AppError, FieldErrors, JwtError};
use thiserror::Error;

use super::password::PasswordError;
use crate::store::StoreError;

/// Errors that can occur during registration and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request payload failed shape validation.
    #[error("invalid credentials payload: {0:?}")]
    Invalid(FieldErrors),

    /// Unknown username or wrong password. Deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Username taken.
    #[error("Username already exists")]
    UsernameTaken,

    /// Hashing or verification failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Token could not be issued.
    #[error(transparent)]
    Token(#[from] JwtError),

    /// Storage failure.
    #[error("repository error: {0}")]
    Store(#[from] StoreError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Invalid(errors) => Self::Validation(errors),
            AuthError::InvalidCredentials | AuthError::UsernameTaken => {
                Self::BadRequest(err.to_string())
            }
            AuthError::Password(_) | AuthError::Token(_) => Self::Internal(err.to_string()),
            AuthError::Store(e) => Self::Database(e.to_string()),
        }
    }
}
