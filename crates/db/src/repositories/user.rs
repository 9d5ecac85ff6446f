//! User repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use splitter_core::auth::User;
use splitter_core::store::{StoreError, UserRepository as UserRepoTrait};
use splitter_shared::types::UserId;

use super::store_err;
use crate::entities::users;

/// User repository implementation.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepoTrait for UserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(store_err)?;

        Ok(model.map(to_domain))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, StoreError> {
        let count = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(&self.db)
            .await
            .map_err(store_err)?;

        Ok(count > 0)
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let model = users::ActiveModel {
            id: Set(user.id.into_inner()),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(store_err)?;

        Ok(to_domain(model))
    }
}

fn to_domain(model: users::Model) -> User {
    User {
        id: UserId::from_uuid(model.id),
        username: model.username,
        password_hash: model.password_hash,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
