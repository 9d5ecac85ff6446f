//! Repository implementations of the core persistence traits.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod expense;
pub mod person;
pub mod snapshot;
pub mod user;

pub use expense::ExpenseRepository;
pub use person::PersonRepository;
pub use snapshot::SnapshotRepository;
pub use user::UserRepository;

use sea_orm::{DbErr, SqlErr};
use splitter_core::store::StoreError;

/// Maps a database error, keeping unique violations distinguishable.
pub(crate) fn store_err(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::Duplicate(detail),
        _ => StoreError::backend(err),
    }
}
