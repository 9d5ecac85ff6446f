//! Client-facing fields derived from an expense.

use super::directory::PersonDirectory;
use super::rounding::round2;
use crate::expense::{Expense, ExpenseDetails};

/// Resolves names and the rounded per-person share of an expense.
#[must_use]
pub fn attach_derived_fields(expense: Expense, directory: &PersonDirectory) -> ExpenseDetails {
    let per_person_amount = round2(expense.share());
    let paid_by_name = directory.name_of(expense.paid_by).to_string();
    let split_between_names = expense
        .split_between
        .iter()
        .map(|id| directory.name_of(*id).to_string())
        .collect();

    ExpenseDetails {
        id: expense.id,
        description: expense.description,
        amount: expense.amount,
        paid_by: expense.paid_by,
        paid_by_name,
        split_between: expense.split_between,
        split_between_names,
        per_person_amount,
        created_at: expense.created_at,
        updated_at: expense.updated_at,
    }
}
