//! In-memory repositories for service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use splitter_shared::types::{ExpenseId, PersonId};

use crate::auth::User;
use crate::expense::Expense;
use crate::person::Person;
use crate::store::{
    BalanceSource, ExpenseRepository, PersonRepository, Snapshot, StoreError, UserRepository,
};

/// Mock store backing every repository trait.
#[derive(Default)]
pub(crate) struct MemoryStore {
    persons: Mutex<HashMap<PersonId, Person>>,
    expenses: Mutex<HashMap<ExpenseId, Expense>>,
    users: Mutex<HashMap<String, User>>,
}

impl MemoryStore {
    pub(crate) fn add_person(&self, name: &str, email: &str) -> Person {
        let now = Utc::now();
        let person = Person {
            id: PersonId::new(),
            name: name.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        };
        self.persons
            .lock()
            .unwrap()
            .insert(person.id, person.clone());
        person
    }

    pub(crate) fn add_expense(
        &self,
        description: &str,
        amount: f64,
        paid_by: PersonId,
        split_between: Vec<PersonId>,
    ) -> Expense {
        let now = Utc::now();
        let expense = Expense {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            paid_by,
            split_between,
            created_at: now,
            updated_at: now,
        };
        self.expenses
            .lock()
            .unwrap()
            .insert(expense.id, expense.clone());
        expense
    }

    pub(crate) fn expense(&self, id: ExpenseId) -> Option<Expense> {
        self.expenses.lock().unwrap().get(&id).cloned()
    }

    pub(crate) fn person_count(&self) -> usize {
        self.persons.lock().unwrap().len()
    }

    pub(crate) fn expense_count(&self) -> usize {
        self.expenses.lock().unwrap().len()
    }

    fn email_taken(&self, email: &str, except: Option<PersonId>) -> bool {
        self.persons
            .lock()
            .unwrap()
            .values()
            .any(|p| p.email == email && Some(p.id) != except)
    }
}

impl PersonRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Person>, StoreError> {
        Ok(self.persons.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, StoreError> {
        Ok(self.persons.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[PersonId]) -> Result<Vec<Person>, StoreError> {
        let persons = self.persons.lock().unwrap();
        Ok(ids.iter().filter_map(|id| persons.get(id).cloned()).collect())
    }

    async fn exists_by_id(&self, id: PersonId) -> Result<bool, StoreError> {
        Ok(self.persons.lock().unwrap().contains_key(&id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.email_taken(email, None))
    }

    async fn insert(&self, person: Person) -> Result<Person, StoreError> {
        if self.email_taken(&person.email, None) {
            return Err(StoreError::Duplicate("persons.email".into()));
        }
        self.persons
            .lock()
            .unwrap()
            .insert(person.id, person.clone());
        Ok(person)
    }

    async fn update(&self, person: Person) -> Result<Person, StoreError> {
        if self.email_taken(&person.email, Some(person.id)) {
            return Err(StoreError::Duplicate("persons.email".into()));
        }
        self.persons
            .lock()
            .unwrap()
            .insert(person.id, person.clone());
        Ok(person)
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<bool, StoreError> {
        Ok(self.persons.lock().unwrap().remove(&id).is_some())
    }
}

impl ExpenseRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Expense>, StoreError> {
        Ok(self.expenses.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, StoreError> {
        Ok(self.expense(id))
    }

    async fn exists_by_id(&self, id: ExpenseId) -> Result<bool, StoreError> {
        Ok(self.expenses.lock().unwrap().contains_key(&id))
    }

    async fn insert(&self, expense: Expense) -> Result<Expense, StoreError> {
        self.expenses
            .lock()
            .unwrap()
            .insert(expense.id, expense.clone());
        Ok(expense)
    }

    async fn update(&self, expense: Expense) -> Result<Expense, StoreError> {
        self.expenses
            .lock()
            .unwrap()
            .insert(expense.id, expense.clone());
        Ok(expense)
    }

    async fn delete_by_id(&self, id: ExpenseId) -> Result<bool, StoreError> {
        Ok(self.expenses.lock().unwrap().remove(&id).is_some())
    }

    async fn count_referencing(&self, person: PersonId) -> Result<u64, StoreError> {
        let expenses = self.expenses.lock().unwrap();
        Ok(expenses
            .values()
            .filter(|e| e.paid_by == person || e.split_between.contains(&person))
            .count() as u64)
    }
}

impl UserRepository for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.lock().unwrap().get(username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.users.lock().unwrap().contains_key(username))
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.username) {
            return Err(StoreError::Duplicate("users.username".into()));
        }
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }
}

impl BalanceSource for MemoryStore {
    async fn snapshot(&self) -> Result<Snapshot, StoreError> {
        Ok(Snapshot {
            persons: self.persons.lock().unwrap().values().cloned().collect(),
            expenses: self.expenses.lock().unwrap().values().cloned().collect(),
        })
    }
}
