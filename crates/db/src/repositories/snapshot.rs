//! Consistent reads for balance computation.

use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    IsolationLevel, QueryOrder, TransactionTrait,
};
use splitter_core::store::{BalanceSource, Snapshot, StoreError};
use tracing::debug;

use super::{expense, person, store_err};
use crate::entities::{expenses, persons};

/// Reads persons and expenses inside one transaction.
///
/// On `PostgreSQL` the transaction is read-only at REPEATABLE READ, so both
/// tables are seen as of the same instant. `SQLite` serialises writers
/// already and gets a plain transaction.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    db: DatabaseConnection,
}

impl SnapshotRepository {
    /// Creates a new snapshot repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl BalanceSource for SnapshotRepository {
    async fn snapshot(&self) -> Result<Snapshot, StoreError> {
        let txn = match self.db.get_database_backend() {
            DatabaseBackend::Postgres => {
                self.db
                    .begin_with_config(
                        Some(IsolationLevel::RepeatableRead),
                        Some(AccessMode::ReadOnly),
                    )
                    .await
            }
            _ => self.db.begin().await,
        }
        .map_err(store_err)?;

        let person_models = persons::Entity::find()
            .order_by_asc(persons::Column::CreatedAt)
            .all(&txn)
            .await
            .map_err(store_err)?;
        let expense_models = expenses::Entity::find()
            .order_by_asc(expenses::Column::CreatedAt)
            .all(&txn)
            .await
            .map_err(store_err)?;

        txn.commit().await.map_err(store_err)?;

        debug!(
            persons = person_models.len(),
            expenses = expense_models.len(),
            "snapshot read"
        );

        Ok(Snapshot {
            persons: person_models.into_iter().map(person::to_domain).collect(),
            expenses: expense_models
                .into_iter()
                .map(expense::to_domain)
                .collect::<Result<_, _>>()?,
        })
    }
}
