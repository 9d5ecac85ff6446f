//! Integration tests for snapshot reads.

mod common;

use splitter_core::balance::BalanceService;
use splitter_core::store::{
    BalanceSource, ExpenseRepository as _, PersonRepository as _,
};
use splitter_db::{ExpenseRepository, PersonRepository, SnapshotRepository};
use std::sync::Arc;

#[tokio::test]
async fn test_snapshot_reads_both_tables() {
    let db = common::setup_db().await;
    let persons = PersonRepository::new(db.clone());
    let expenses = ExpenseRepository::new(db.clone());
    let alice = persons
        .insert(common::person("Alice", "alice@example.com"))
        .await
        .unwrap();
    expenses
        .insert(common::expense(12.0, alice.id, vec![alice.id]))
        .await
        .unwrap();

    let snapshot = SnapshotRepository::new(db).snapshot().await.unwrap();

    assert_eq!(snapshot.persons.len(), 1);
    assert_eq!(snapshot.expenses.len(), 1);
}

#[tokio::test]
async fn test_balances_keep_deleted_person() {
    let db = common::setup_db().await;
    let persons = PersonRepository::new(db.clone());
    let expenses = ExpenseRepository::new(db.clone());
    let alice = persons
        .insert(common::person("Alice", "alice@example.com"))
        .await
        .unwrap();
    let bob = persons
        .insert(common::person("Bob", "bob@example.com"))
        .await
        .unwrap();
    expenses
        .insert(common::expense(100.0, alice.id, vec![alice.id, bob.id]))
        .await
        .unwrap();
    persons.delete_by_id(bob.id).await.unwrap();

    let service = BalanceService::new(Arc::new(SnapshotRepository::new(db)));
    let balances = service.balances().await.unwrap();
    let summary = service.summary().await.unwrap();

    assert!((balances[&alice.id] - 50.0).abs() < 1e-9);
    assert!((balances[&bob.id] + 50.0).abs() < 1e-9);
    assert!(summary.contains_key(&alice.id));
    assert!(!summary.contains_key(&bob.id));
}
