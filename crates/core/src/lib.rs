//! Core business logic for Splitter.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached only through the repository traits in [`store`].
//!
//! # Modules
//!
//! - `balance` - Net balance engine and summary
//! - `person` - People who share expenses
//! - `expense` - Expenses with a payer and split participants
//! - `auth` - Account registration, login and password hashing
//! - `store` - Repository contracts implemented by the db crate

pub mod auth;
pub mod balance;
pub mod expense;
pub mod person;
pub mod store;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;
