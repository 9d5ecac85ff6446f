//! Property-based tests for the balance engine.
//!
//! - Conservation: balances always sum to zero
//! - Zero activity: uninvolved persons stay at exactly zero
//! - Self split: a payer inside the split nets amount minus one share

use chrono::Utc;
use proptest::prelude::*;
use splitter_shared::types::{ExpenseId, PersonId};

use super::engine::{compute_balances, compute_summary};
use crate::expense::Expense;
use crate::person::Person;

/// Raw expense shape: amount in cents, payer index, participant indices.
type ExpenseSeed = (u32, usize, Vec<usize>);

/// Strategy to generate positive amounts (0.01 to 100,000.00).
fn amount_cents() -> impl Strategy<Value = u32> {
    1u32..10_000_000
}

/// Strategy to generate 1 to 10 expenses over `group` persons.
fn expense_seeds(group: usize) -> impl Strategy<Value = Vec<ExpenseSeed>> {
    prop::collection::vec(
        (
            amount_cents(),
            0..group,
            prop::collection::vec(0..group, 1..8),
        ),
        1..10,
    )
}

/// Strategy to generate a group size and expenses over it.
fn group_with_expenses() -> impl Strategy<Value = (usize, Vec<ExpenseSeed>)> {
    (1usize..8).prop_flat_map(|group| (Just(group), expense_seeds(group)))
}

fn persons(count: usize) -> Vec<Person> {
    let now = Utc::now();
    (0..count)
        .map(|i| Person {
            id: PersonId::new(),
            name: format!("Person {i}"),
            email: format!("person{i}@example.com"),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

fn expenses(persons: &[Person], seeds: &[ExpenseSeed]) -> Vec<Expense> {
    let now = Utc::now();
    seeds
        .iter()
        .map(|(cents, payer, split)| Expense {
            id: ExpenseId::new(),
            description: "generated".into(),
            amount: f64::from(*cents) / 100.0,
            paid_by: persons[*payer].id,
            split_between: split.iter().map(|i| persons[*i].id).collect(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* group and expenses, the balances SHALL sum to zero up to
    /// floating-point error.
    #[test]
    fn prop_balances_are_conserved((group, seeds) in group_with_expenses()) {
        let persons = persons(group);
        let expenses = expenses(&persons, &seeds);
        let total_paid: f64 = expenses.iter().map(|e| e.amount).sum();

        let balances = compute_balances(&persons, &expenses);
        let sum: f64 = balances.values().sum();

        prop_assert!(sum.abs() <= 1e-9 * total_paid.max(1.0), "sum was {}", sum);
    }

    /// *For any* expenses that never mention a person, that person's balance
    /// SHALL be exactly zero.
    #[test]
    fn prop_uninvolved_person_stays_zero((group, seeds) in group_with_expenses()) {
        // Seeds only index the first `group` persons.
        let persons = persons(group + 1);
        let bystander = persons[group].id;
        let expenses = expenses(&persons, &seeds);

        let balances = compute_balances(&persons, &expenses);

        prop_assert_eq!(balances[&bystander].to_bits(), 0.0f64.to_bits());
    }

    /// *For any* single expense whose payer is also split once, the payer
    /// SHALL net `amount - amount / len(split)`.
    #[test]
    fn prop_self_split_nets_amount_minus_share(
        cents in amount_cents(),
        others in 0usize..6,
    ) {
        let persons = persons(others + 1);
        let split: Vec<usize> = (0..=others).collect();
        let expenses = expenses(&persons, &[(cents, 0, split)]);
        let amount = expenses[0].amount;

        let balances = compute_balances(&persons, &expenses);
        let expected = amount - amount / (others + 1) as f64;

        prop_assert!((balances[&persons[0].id] - expected).abs() < 1e-6);
    }

    /// *For any* group, the summary SHALL list exactly the current persons
    /// with balances rounded to cents.
    #[test]
    fn prop_summary_covers_persons_rounded((group, seeds) in group_with_expenses()) {
        let persons = persons(group);
        let expenses = expenses(&persons, &seeds);

        let summary = compute_summary(&persons, &expenses);

        prop_assert_eq!(summary.len(), persons.len());
        for entry in summary.values() {
            let cents = entry.balance * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-6);
        }
    }
}
