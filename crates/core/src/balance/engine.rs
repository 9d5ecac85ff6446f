//! Balance computation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use splitter_shared::types::PersonId;

use super::rounding::round2;
use crate::expense::Expense;
use crate::person::Person;

/// Unrounded net balance per person id.
pub type Balances = BTreeMap<PersonId, f64>;

/// Rounded balances of existing persons, with contact details.
pub type Summary = BTreeMap<PersonId, PersonBalance>;

/// One summary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonBalance {
    /// Person name.
    pub name: String,
    /// Person email.
    pub email: String,
    /// Net balance rounded to cents. Positive means the person is owed.
    pub balance: f64,
}

/// Computes each person's net balance.
///
/// Every known person starts at `0.0`. For each expense the payer gains the
/// full amount and every split entry loses one share, so a participant
/// listed twice pays twice. Ids that no longer belong to a person are kept.
#[must_use]
pub fn compute_balances(persons: &[Person], expenses: &[Expense]) -> Balances {
    let mut balances: Balances = persons.iter().map(|p| (p.id, 0.0)).collect();

    for expense in expenses {
        let share = expense.share();
        *balances.entry(expense.paid_by).or_insert(0.0) += expense.amount;
        for participant in &expense.split_between {
            *balances.entry(*participant).or_insert(0.0) -= share;
        }
    }

    balances
}

/// Computes rounded balances joined with name and email.
///
/// Only ids of current persons appear; dangling references are left to
/// [`compute_balances`].
#[must_use]
pub fn compute_summary(persons: &[Person], expenses: &[Expense]) -> Summary {
    let balances = compute_balances(persons, expenses);

    persons
        .iter()
        .map(|person| {
            let balance = balances.get(&person.id).copied().unwrap_or_default();
            (
                person.id,
                PersonBalance {
                    name: person.name.clone(),
                    email: person.email.clone(),
                    balance: round2(balance),
                },
            )
        })
        .collect()
}
