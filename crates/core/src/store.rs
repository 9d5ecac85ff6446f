//! Repository contracts.
//!
//! These traits are implemented by the db crate to provide actual database
//! operations, and by in-memory fakes in tests.

use std::future::Future;

use splitter_shared::AppError;
use splitter_shared::types::{ExpenseId, PersonId};
use thiserror::Error;

use crate::auth::User;
use crate::expense::Expense;
use crate::person::Person;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    #[error("duplicate value: {0}")]
    Duplicate(String),

    /// Any other backend failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a backend error from any displayable cause.
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Database(err.to_string())
    }
}

/// Persons and expenses read together in one consistent view.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Every stored person.
    pub persons: Vec<Person>,
    /// Every stored expense.
    pub expenses: Vec<Expense>,
}

/// Repository trait for person persistence.
pub trait PersonRepository: Send + Sync {
    /// List every person.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Person>, StoreError>> + Send;

    /// Find a person by ID.
    fn find_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, StoreError>> + Send;

    /// Load the persons matching any of `ids`. Unknown ids are skipped.
    fn find_by_ids(
        &self,
        ids: &[PersonId],
    ) -> impl Future<Output = Result<Vec<Person>, StoreError>> + Send;

    /// Check if a person exists.
    fn exists_by_id(&self, id: PersonId) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Check if any person uses `email`.
    fn exists_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Insert a new person.
    fn insert(&self, person: Person) -> impl Future<Output = Result<Person, StoreError>> + Send;

    /// Overwrite an existing person.
    fn update(&self, person: Person) -> impl Future<Output = Result<Person, StoreError>> + Send;

    /// Delete a person, returning whether a row was removed.
    fn delete_by_id(&self, id: PersonId) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

/// Repository trait for expense persistence.
pub trait ExpenseRepository: Send + Sync {
    /// List every expense.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Expense>, StoreError>> + Send;

    /// Find an expense by ID.
    fn find_by_id(
        &self,
        id: ExpenseId,
    ) -> impl Future<Output = Result<Option<Expense>, StoreError>> + Send;

    /// Check if an expense exists.
    fn exists_by_id(&self, id: ExpenseId)
    -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Insert a new expense.
    fn insert(&self, expense: Expense) -> impl Future<Output = Result<Expense, StoreError>> + Send;

    /// Overwrite an existing expense.
    fn update(&self, expense: Expense) -> impl Future<Output = Result<Expense, StoreError>> + Send;

    /// Delete an expense, returning whether a row was removed.
    fn delete_by_id(
        &self,
        id: ExpenseId,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Count the expenses that name `person` as payer or participant.
    fn count_referencing(
        &self,
        person: PersonId,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;
}

/// Repository trait for user accounts.
pub trait UserRepository: Send + Sync {
    /// Find a user by username.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;

    /// Check if a username is taken.
    fn exists_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Insert a new user.
    fn insert(&self, user: User) -> impl Future<Output = Result<User, StoreError>> + Send;
}

/// Source of consistent person/expense snapshots for balance reads.
pub trait BalanceSource: Send + Sync {
    /// Read all persons and expenses together.
    fn snapshot(&self) -> impl Future<Output = Result<Snapshot, StoreError>> + Send;
}
