//! Account types.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use splitter_shared::types::UserId;
use validator::Validate;

/// A registered account.
#[derive(Clone)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Login name, unique.
    pub username: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last modified.
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[hidden]")
            .finish_non_exhaustive()
    }
}

/// Username and password, used for both registration and login.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct Credentials {
    /// Login name.
    #[validate(custom(
        function = "crate::validation::not_blank",
        message = "Username is required"
    ))]
    pub username: String,
    /// Plaintext password.
    #[validate(custom(
        function = "crate::validation::not_blank",
        message = "Password is required"
    ))]
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .finish()
    }
}
