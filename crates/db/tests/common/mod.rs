//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use chrono::Utc;
use sea_orm::{Database, DatabaseConnection};
use splitter_core::expense::Expense;
use splitter_core::person::Person;
use splitter_db::migration::{Migrator, MigratorTrait};
use splitter_shared::types::{ExpenseId, PersonId};

/// Fresh in-memory database with migrations applied.
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None).await.expect("Failed to run migrations");
    db
}

pub fn person(name: &str, email: &str) -> Person {
    let now = Utc::now();
    Person {
        id: PersonId::new(),
        name: name.to_string(),
        email: email.to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn expense(amount: f64, paid_by: PersonId, split_between: Vec<PersonId>) -> Expense {
    let now = Utc::now();
    Expense {
        id: ExpenseId::new(),
        description: "Groceries".to_string(),
        amount,
        paid_by,
        split_between,
        created_at: now,
        updated_at: now,
    }
}
