//! `SeaORM` entities.

pub mod prelude;

pub mod expenses;
pub mod persons;
pub mod users;
