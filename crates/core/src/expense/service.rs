//! Expense service implementation.

use std::sync::Arc;

use chrono::Utc;
use splitter_shared::types::{ExpenseId, PersonId};
use tracing::info;

use super::error::ExpenseError;
use super::types::{Expense, ExpenseDetails, ExpenseInput};
use crate::balance::{PersonDirectory, attach_derived_fields};
use crate::store::{ExpenseRepository, PersonRepository};
use crate::validation::check;

/// Validated participants of an expense write.
struct Participants {
    amount: f64,
    paid_by: PersonId,
    split_between: Vec<PersonId>,
    directory: PersonDirectory,
}

/// Expense service for recording shared costs.
///
/// Writes are validated in a fixed order:
/// 1. Payload shape (description, amount, payer, non-empty split)
/// 2. The payer must exist
/// 3. Each split participant must exist, checked in request order
///
/// Nothing is persisted when any step fails. Referenced persons are loaded
/// in a single batch.
pub struct ExpenseService<P: PersonRepository, E: ExpenseRepository> {
    persons: Arc<P>,
    expenses: Arc<E>,
}

impl<P: PersonRepository, E: ExpenseRepository> ExpenseService<P, E> {
    /// Create a new expense service.
    #[must_use]
    pub fn new(persons: Arc<P>, expenses: Arc<E>) -> Self {
        Self { persons, expenses }
    }

    /// Record a new expense.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The payload is invalid
    /// - The payer or a participant does not exist
    /// - Repository operation fails
    pub async fn create(&self, input: ExpenseInput) -> Result<ExpenseDetails, ExpenseError> {
        check(&input).map_err(ExpenseError::Invalid)?;
        let participants = self.resolve(&input).await?;

        let now = Utc::now();
        let expense = Expense {
            id: ExpenseId::new(),
            description: input.description,
            amount: participants.amount,
            paid_by: participants.paid_by,
            split_between: participants.split_between,
            created_at: now,
            updated_at: now,
        };

        let saved = self.expenses.insert(expense).await?;
        info!(
            expense_id = %saved.id,
            amount = saved.amount,
            participants = saved.split_between.len(),
            "expense created"
        );
        Ok(attach_derived_fields(saved, &participants.directory))
    }

    /// List every expense with names resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository operation fails.
    pub async fn list(&self) -> Result<Vec<ExpenseDetails>, ExpenseError> {
        let expenses = self.expenses.find_all().await?;
        let directory = self.directory_for(&expenses).await?;

        Ok(expenses
            .into_iter()
            .map(|expense| attach_derived_fields(expense, &directory))
            .collect())
    }

    /// Get an expense by its client-supplied id.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` if no expense has this id.
    pub async fn get(&self, id: &str) -> Result<ExpenseDetails, ExpenseError> {
        let expense = self.find(id).await?;
        let directory = self.directory_for(std::slice::from_ref(&expense)).await?;
        Ok(attach_derived_fields(expense, &directory))
    }

    /// Replace an expense. `createdAt` is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The payload is invalid
    /// - The expense does not exist
    /// - The payer or a participant does not exist
    /// - Repository operation fails
    pub async fn update(
        &self,
        id: &str,
        input: ExpenseInput,
    ) -> Result<ExpenseDetails, ExpenseError> {
        check(&input).map_err(ExpenseError::Invalid)?;
        let mut expense = self.find(id).await?;
        let participants = self.resolve(&input).await?;

        expense.description = input.description;
        expense.amount = participants.amount;
        expense.paid_by = participants.paid_by;
        expense.split_between = participants.split_between;
        expense.updated_at = Utc::now();

        let saved = self.expenses.update(expense).await?;
        info!(expense_id = %saved.id, "expense updated");
        Ok(attach_derived_fields(saved, &participants.directory))
    }

    /// Delete an expense.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` if no expense has this id.
    pub async fn delete(&self, id: &str) -> Result<(), ExpenseError> {
        let expense_id = ExpenseId::parse(id).ok_or_else(|| ExpenseError::not_found(id))?;

        if !self.expenses.exists_by_id(expense_id).await? {
            return Err(ExpenseError::not_found(id));
        }
        if !self.expenses.delete_by_id(expense_id).await? {
            return Err(ExpenseError::not_found(id));
        }

        info!(expense_id = %expense_id, "expense deleted");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Expense, ExpenseError> {
        let expense_id = ExpenseId::parse(id).ok_or_else(|| ExpenseError::not_found(id))?;

        self.expenses
            .find_by_id(expense_id)
            .await?
            .ok_or_else(|| ExpenseError::not_found(id))
    }

    /// Resolves payer and participants of an already shape-checked input.
    async fn resolve(&self, input: &ExpenseInput) -> Result<Participants, ExpenseError> {
        let Some(amount) = input.amount else {
            return Err(ExpenseError::Invalid(
                [("amount".to_string(), "Amount is required".to_string())].into(),
            ));
        };

        let mut candidates: Vec<PersonId> = std::iter::once(input.paid_by.as_str())
            .chain(input.split_between.iter().map(String::as_str))
            .filter_map(PersonId::parse)
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        let directory = PersonDirectory::new(self.persons.find_by_ids(&candidates).await?);

        let paid_by = directory
            .resolve(&input.paid_by)
            .ok_or_else(|| ExpenseError::person_not_found(input.paid_by.as_str()))?;

        let split_between = input
            .split_between
            .iter()
            .map(|raw| {
                directory
                    .resolve(raw)
                    .ok_or_else(|| ExpenseError::person_not_found(raw.as_str()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Participants {
            amount,
            paid_by,
            split_between,
            directory,
        })
    }

    async fn directory_for(&self, expenses: &[Expense]) -> Result<PersonDirectory, ExpenseError> {
        let mut ids: Vec<PersonId> = expenses
            .iter()
            .flat_map(|e| std::iter::once(e.paid_by).chain(e.split_between.iter().copied()))
            .collect();
        ids.sort_unstable();
        ids.dedup();

        Ok(PersonDirectory::new(self.persons.find_by_ids(&ids).await?))
    }
}
