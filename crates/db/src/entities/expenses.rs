//! `SeaORM` Entity for expenses table.
//!
//! `paid_by` and `split_between` carry no foreign keys: an expense keeps
//! pointing at a person after that person is deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub paid_by: Uuid,
    /// Ordered JSON array of person ids, duplicates kept.
    #[sea_orm(column_type = "Text")]
    pub split_between: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
