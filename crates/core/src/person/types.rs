//! Person domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use splitter_shared::types::PersonId;
use validator::Validate;

/// A participant that can pay for or share expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Contact email, unique across persons.
    pub email: String,
    /// When the person was created.
    pub created_at: DateTime<Utc>,
    /// When the person was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a person.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonInput {
    /// Display name.
    #[validate(custom(function = "crate::validation::not_blank", message = "Name is required"))]
    pub name: String,
    /// Contact email.
    #[validate(custom(function = "crate::validation::email_address"))]
    pub email: String,
}
