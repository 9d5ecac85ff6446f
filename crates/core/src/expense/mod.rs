//! Expenses paid by one person and split equally among participants.

mod error;
mod service;
mod types;

pub use error::ExpenseError;
pub use service::ExpenseService;
pub use types::{Expense, ExpenseDetails, ExpenseInput};
