//! Net balance engine.
//!
//! Every expense credits its payer with the full amount and debits each
//! split entry with an equal share, so the balances of a group always sum
//! to zero. Accumulation is unrounded; rounding to cents happens only when
//! a value is presented.

mod derived;
mod directory;
mod engine;
mod rounding;
mod service;

#[cfg(test)]
mod props;

pub use derived::attach_derived_fields;
pub use directory::{PersonDirectory, UNKNOWN_PERSON};
pub use engine::{Balances, PersonBalance, Summary, compute_balances, compute_summary};
pub use rounding::round2;
pub use service::BalanceService;
