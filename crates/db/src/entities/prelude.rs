//! Entity re-exports.

pub use super::expenses::Entity as Expenses;
pub use super::persons::Entity as Persons;
pub use super::users::Entity as Users;
