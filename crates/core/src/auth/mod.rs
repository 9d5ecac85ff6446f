//! Authentication and password hashing.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Account registration and login issuing JWT access tokens

mod error;
mod password;
mod service;
mod types;

pub use error::AuthError;
pub use password::{PasswordError, hash_password, verify_password};
pub use service::AuthService;
pub use types::{Credentials, User};
