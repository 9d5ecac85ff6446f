//! Person repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use splitter_core::person::Person;
use splitter_core::store::{PersonRepository as PersonRepoTrait, StoreError};
use splitter_shared::types::PersonId;

use super::store_err;
use crate::entities::persons;

/// Most ids bound into a single `IN (...)` list, well under the `SQLite` and
/// `PostgreSQL` bind parameter limits.
const IDS_PER_QUERY: usize = 1_000;

/// Person repository implementation.
#[derive(Debug, Clone)]
pub struct PersonRepository {
    db: DatabaseConnection,
}

impl PersonRepository {
    /// Creates a new person repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PersonRepoTrait for PersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, StoreError> {
        let models = persons::Entity::find()
            .order_by_asc(persons::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(store_err)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, StoreError> {
        let model = persons::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_err)?;

        Ok(model.map(to_domain))
    }

    async fn find_by_ids(&self, ids: &[PersonId]) -> Result<Vec<Person>, StoreError> {
        let mut found = Vec::new();
        for chunk in ids.chunks(IDS_PER_QUERY) {
            let models = persons::Entity::find()
                .filter(persons::Column::Id.is_in(chunk.iter().map(|id| id.into_inner())))
                .all(&self.db)
                .await
                .map_err(store_err)?;
            found.extend(models.into_iter().map(to_domain));
        }

        Ok(found)
    }

    async fn exists_by_id(&self, id: PersonId) -> Result<bool, StoreError> {
        let count = persons::Entity::find_by_id(id.into_inner())
            .count(&self.db)
            .await
            .map_err(store_err)?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let count = persons::Entity::find()
            .filter(persons::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(store_err)?;

        Ok(count > 0)
    }

    async fn insert(&self, person: Person) -> Result<Person, StoreError> {
        let model = persons::ActiveModel {
            id: Set(person.id.into_inner()),
            name: Set(person.name),
            email: Set(person.email),
            created_at: Set(person.created_at),
            updated_at: Set(person.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(store_err)?;

        Ok(to_domain(model))
    }

    async fn update(&self, person: Person) -> Result<Person, StoreError> {
        let model = persons::ActiveModel {
            id: Set(person.id.into_inner()),
            name: Set(person.name),
            email: Set(person.email),
            created_at: Set(person.created_at),
            updated_at: Set(person.updated_at),
        }
        .update(&self.db)
        .await
        .map_err(store_err)?;

        Ok(to_domain(model))
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<bool, StoreError> {
        let result = persons::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(store_err)?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert database model to domain person.
pub(crate) fn to_domain(model: persons::Model) -> Person {
    Person {
        id: PersonId::from_uuid(model.id),
        name: model.name,
        email: model.email,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
