//! People who share expenses.

mod error;
mod service;
mod types;

pub use error::PersonError;
pub use service::PersonService;
pub use types::{Person, PersonInput};
