//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Secure settings table entity
///
/// One row per settings key; values are opaque strings owned by whichever
/// service writes the key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "secure_settings")]
pub struct Model {
    /// Settings key
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,

    /// Stored string value
    #[sea_orm(column_type = "Text")]
    pub value: String,

    /// Last write timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
