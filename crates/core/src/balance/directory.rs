//! Name lookup over a batch of loaded persons.

use std::collections::HashMap;

use splitter_shared::types::PersonId;

use crate::person::Person;

/// Name shown for ids that no longer resolve to a person.
pub const UNKNOWN_PERSON: &str = "Unknown";

/// Persons loaded in one batch, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct PersonDirectory {
    persons: HashMap<PersonId, Person>,
}

impl PersonDirectory {
    /// Indexes the given persons.
    pub fn new(persons: impl IntoIterator<Item = Person>) -> Self {
        Self {
            persons: persons.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Returns the person's name, or [`UNKNOWN_PERSON`].
    #[must_use]
    pub fn name_of(&self, id: PersonId) -> &str {
        match self.persons.get(&id) {
            Some(person) => &person.name,
            None => UNKNOWN_PERSON,
        }
    }

    /// Resolves a client-supplied id to a loaded person id.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<PersonId> {
        PersonId::parse(raw).filter(|id| self.persons.contains_key(id))
    }
}
