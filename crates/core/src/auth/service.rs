//! Registration and login.

use std::sync::Arc;

use chrono::Utc;
use splitter_shared::types::UserId;
use splitter_shared::{JwtService, LoginResponse};
use tracing::{info, warn};

use super::error::AuthError;
use super::password::{hash_password, verify_password};
use super::types::{Credentials, User};
use crate::store::{StoreError, UserRepository};
use crate::validation::check;

/// Authentication service for account registration and token issuance.
pub struct AuthService<U: UserRepository> {
    users: Arc<U>,
    jwt: Arc<JwtService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(users: Arc<U>, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Username or password is blank
    /// - The username is already taken
    /// - Hashing or repository operation fails
    pub async fn register(&self, credentials: Credentials) -> Result<User, AuthError> {
        check(&credentials).map_err(AuthError::Invalid)?;

        if self.users.exists_by_username(&credentials.username).await? {
            return Err(AuthError::UsernameTaken);
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: credentials.username,
            password_hash: hash_password(&credentials.password)?,
            created_at: now,
            updated_at: now,
        };

        let saved = self.users.insert(user).await.map_err(|e| match e {
            StoreError::Duplicate(_) => AuthError::UsernameTaken,
            other => AuthError::Store(other),
        })?;
        info!(user_id = %saved.id, username = %saved.username, "user registered");
        Ok(saved)
    }

    /// Check credentials and issue an access token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown user or a wrong
    /// password, and other variants when hashing, signing or storage fails.
    pub async fn login(&self, credentials: Credentials) -> Result<LoginResponse, AuthError> {
        check(&credentials).map_err(AuthError::Invalid)?;

        let Some(user) = self.users.find_by_username(&credentials.username).await? else {
            warn!(username = %credentials.username, "login for unknown user");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(&credentials.password, &user.password_hash)? {
            warn!(user_id = %user.id, "login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.jwt.generate_access_token(user.id, &user.username)?;
        info!(user_id = %user.id, "user logged in");

        Ok(LoginResponse::bearer(
            token,
            user.username,
            self.jwt.access_token_expires_in(),
        ))
    }
}
