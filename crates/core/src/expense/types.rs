//! Expense domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use splitter_shared::types::{ExpenseId, PersonId};
use validator::Validate;

/// A stored expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier.
    pub id: ExpenseId,
    /// What was paid for.
    pub description: String,
    /// Total paid, always positive.
    pub amount: f64,
    /// Person who paid the full amount.
    pub paid_by: PersonId,
    /// Participants sharing the cost, in request order. May repeat.
    pub split_between: Vec<PersonId>,
    /// When the expense was created.
    pub created_at: DateTime<Utc>,
    /// When the expense was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Returns the unrounded amount owed by each split entry.
    #[must_use]
    pub fn share(&self) -> f64 {
        self.amount / self.split_between.len() as f64
    }
}

/// Payload for creating or updating an expense.
///
/// Person ids stay raw strings here: an id that does not parse is reported
/// as a missing person, not as a malformed payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpenseInput {
    /// What was paid for.
    #[validate(custom(
        function = "crate::validation::not_blank",
        message = "Description is required"
    ))]
    pub description: String,

    /// Total paid.
    #[validate(
        required(message = "Amount is required"),
        range(exclusive_min = 0.0, message = "Amount must be positive")
    )]
    pub amount: Option<f64>,

    /// Payer id.
    #[validate(custom(
        function = "crate::validation::not_blank",
        message = "Paid by person ID is required"
    ))]
    pub paid_by: String,

    /// Participant ids.
    #[validate(length(min = 1, message = "Split between list cannot be empty"))]
    pub split_between: Vec<String>,
}

/// An expense as returned to clients, with names resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDetails {
    /// Unique identifier.
    pub id: ExpenseId,
    /// What was paid for.
    pub description: String,
    /// Total paid.
    pub amount: f64,
    /// Payer id.
    pub paid_by: PersonId,
    /// Payer name, `"Unknown"` once the person is gone.
    pub paid_by_name: String,
    /// Participant ids.
    pub split_between: Vec<PersonId>,
    /// One name per participant id, same order.
    pub split_between_names: Vec<String>,
    /// Share per split entry, rounded to cents.
    pub per_person_amount: f64,
    /// When the expense was created.
    pub created_at: DateTime<Utc>,
    /// When the expense was last modified.
    pub updated_at: DateTime<Utc>,
}
