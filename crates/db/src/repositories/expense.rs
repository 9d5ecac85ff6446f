//! Expense repository for database operations.
//!
//! `split_between` is stored as JSON text so order and duplicates survive
//! the round trip.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use splitter_core::expense::Expense;
use splitter_core::store::{ExpenseRepository as ExpenseRepoTrait, StoreError};
use splitter_shared::types::{ExpenseId, PersonId};

use super::store_err;
use crate::entities::expenses;

/// Expense repository implementation.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ExpenseRepoTrait for ExpenseRepository {
    async fn find_all(&self) -> Result<Vec<Expense>, StoreError> {
        let models = expenses::Entity::find()
            .order_by_asc(expenses::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(store_err)?;

        models.into_iter().map(to_domain).collect()
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, StoreError> {
        let model = expenses::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_err)?;

        model.map(to_domain).transpose()
    }

    async fn exists_by_id(&self, id: ExpenseId) -> Result<bool, StoreError> {
        let count = expenses::Entity::find_by_id(id.into_inner())
            .count(&self.db)
            .await
            .map_err(store_err)?;

        Ok(count > 0)
    }

    async fn insert(&self, expense: Expense) -> Result<Expense, StoreError> {
        let model = to_active_model(expense)?
            .insert(&self.db)
            .await
            .map_err(store_err)?;

        to_domain(model)
    }

    async fn update(&self, expense: Expense) -> Result<Expense, StoreError> {
        let model = to_active_model(expense)?
            .update(&self.db)
            .await
            .map_err(store_err)?;

        to_domain(model)
    }

    async fn delete_by_id(&self, id: ExpenseId) -> Result<bool, StoreError> {
        let result = expenses::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(store_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn count_referencing(&self, person: PersonId) -> Result<u64, StoreError> {
        // Ids are stored hyphenated inside the JSON text.
        let needle = person.into_inner().hyphenated().to_string();

        expenses::Entity::find()
            .filter(
                Condition::any()
                    .add(expenses::Column::PaidBy.eq(person.into_inner()))
                    .add(expenses::Column::SplitBetween.contains(needle)),
            )
            .count(&self.db)
            .await
            .map_err(store_err)
    }
}

fn to_active_model(expense: Expense) -> Result<expenses::ActiveModel, StoreError> {
    let split_between =
        serde_json::to_string(&expense.split_between).map_err(StoreError::backend)?;

    Ok(expenses::ActiveModel {
        id: Set(expense.id.into_inner()),
        description: Set(expense.description),
        amount: Set(expense.amount),
        paid_by: Set(expense.paid_by.into_inner()),
        split_between: Set(split_between),
        created_at: Set(expense.created_at),
        updated_at: Set(expense.updated_at),
    })
}

/// Convert database model to domain expense.
pub(crate) fn to_domain(model: expenses::Model) -> Result<Expense, StoreError> {
    let split_between: Vec<PersonId> = serde_json::from_str(&model.split_between)
        .map_err(|e| StoreError::Backend(format!("expense {}: bad split_between: {e}", model.id)))?;

    Ok(Expense {
        id: ExpenseId::from_uuid(model.id),
        description: model.description,
        amount: model.amount,
        paid_by: PersonId::from_uuid(model.paid_by),
        split_between,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
