//! Person service implementation.

use std::sync::Arc;

use chrono::Utc;
use splitter_shared::types::PersonId;
use tracing::{info, warn};

use super::error::PersonError;
use super::types::{Person, PersonInput};
use crate::store::{ExpenseRepository, PersonRepository, StoreError};
use crate::validation::check;

/// Person service for managing the people that share expenses.
///
/// Deleting a person never cascades: expenses keep their reference, which
/// then resolves to `"Unknown"` and stays in the raw balance map.
pub struct PersonService<P: PersonRepository, E: ExpenseRepository> {
    persons: Arc<P>,
    expenses: Arc<E>,
}

impl<P: PersonRepository, E: ExpenseRepository> PersonService<P, E> {
    /// Create a new person service.
    #[must_use]
    pub fn new(persons: Arc<P>, expenses: Arc<E>) -> Self {
        Self { persons, expenses }
    }

    /// Create a person.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Name or email is blank, or the email is malformed
    /// - Another person already uses the email
    /// - Repository operation fails
    pub async fn create(&self, input: PersonInput) -> Result<Person, PersonError> {
        check(&input).map_err(PersonError::Invalid)?;

        if self.persons.exists_by_email(&input.email).await? {
            return Err(PersonError::EmailExists);
        }

        let now = Utc::now();
        let person = Person {
            id: PersonId::new(),
            name: input.name,
            email: input.email,
            created_at: now,
            updated_at: now,
        };

        let saved = self.persons.insert(person).await.map_err(duplicate_email)?;
        info!(person_id = %saved.id, "person created");
        Ok(saved)
    }

    /// List every person.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository operation fails.
    pub async fn list(&self) -> Result<Vec<Person>, PersonError> {
        Ok(self.persons.find_all().await?)
    }

    /// Get a person by its client-supplied id.
    ///
    /// # Errors
    ///
    /// Returns `PersonError::NotFound` if no person has this id.
    pub async fn get(&self, id: &str) -> Result<Person, PersonError> {
        let person_id = PersonId::parse(id).ok_or_else(|| PersonError::not_found(id))?;

        self.persons
            .find_by_id(person_id)
            .await?
            .ok_or_else(|| PersonError::not_found(id))
    }

    /// Replace a person's name and email.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The payload is invalid
    /// - The person does not exist
    /// - The new email belongs to another person
    /// - Repository operation fails
    pub async fn update(&self, id: &str, input: PersonInput) -> Result<Person, PersonError> {
        check(&input).map_err(PersonError::Invalid)?;

        let mut person = self.get(id).await?;

        if person.email != input.email && self.persons.exists_by_email(&input.email).await? {
            return Err(PersonError::EmailExists);
        }

        person.name = input.name;
        person.email = input.email;
        person.updated_at = Utc::now();

        let saved = self.persons.update(person).await.map_err(duplicate_email)?;
        info!(person_id = %saved.id, "person updated");
        Ok(saved)
    }

    /// Delete a person.
    ///
    /// # Errors
    ///
    /// Returns `PersonError::NotFound` if no person has this id.
    pub async fn delete(&self, id: &str) -> Result<(), PersonError> {
        let person_id = PersonId::parse(id).ok_or_else(|| PersonError::not_found(id))?;

        if !self.persons.exists_by_id(person_id).await? {
            return Err(PersonError::not_found(id));
        }

        let references = self.expenses.count_referencing(person_id).await?;

        if !self.persons.delete_by_id(person_id).await? {
            return Err(PersonError::not_found(id));
        }

        if references > 0 {
            warn!(
                person_id = %person_id,
                references,
                "deleted person is still referenced by expenses"
            );
        }
        info!(person_id = %person_id, "person deleted");
        Ok(())
    }
}

/// A unique violation on write means the email was taken concurrently.
fn duplicate_email(err: StoreError) -> PersonError {
    match err {
        StoreError::Duplicate(_) => PersonError::EmailExists,
        other => PersonError::Store(other),
    }
}
