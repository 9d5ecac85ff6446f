//! Balance service implementation.

use std::sync::Arc;

use tracing::debug;

use super::engine::{Balances, Summary, compute_balances, compute_summary};
use crate::store::{BalanceSource, StoreError};

/// Runs the engine over one consistent snapshot of persons and expenses.
pub struct BalanceService<S: BalanceSource> {
    source: Arc<S>,
}

impl<S: BalanceSource> BalanceService<S> {
    /// Create a new balance service.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Raw balances, dangling ids included.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    pub async fn balances(&self) -> Result<Balances, StoreError> {
        let snapshot = self.source.snapshot().await?;
        debug!(
            persons = snapshot.persons.len(),
            expenses = snapshot.expenses.len(),
            "computing balances"
        );
        Ok(compute_balances(&snapshot.persons, &snapshot.expenses))
    }

    /// Rounded balances of current persons.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    pub async fn summary(&self) -> Result<Summary, StoreError> {
        let snapshot = self.source.snapshot().await?;
        Ok(compute_summary(&snapshot.persons, &snapshot.expenses))
    }
}
