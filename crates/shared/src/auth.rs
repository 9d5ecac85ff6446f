//! Authentication types for JWT and tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username).
    pub sub: String,
    /// User ID.
    pub uid: UserId,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: UserId, username: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: username.to_string(),
            uid: user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the username from claims.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.uid
    }
}

/// Login response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed access token.
    pub token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Authenticated username.
    pub username: String,
    /// Token expiration in seconds.
    pub expires_in: i64,
}

impl LoginResponse {
    /// Creates a bearer token response.
    #[must_use]
    pub fn bearer(token: String, username: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            username,
            expires_in,
        }
    }
}

/// Registration response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Confirmation message.
    pub message: String,
}
