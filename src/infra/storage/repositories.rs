//! SeaORM settings store implementation

use crate::domain::repository::SettingsStore;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::entity;

/// Settings store backed by the `secure_settings` table
pub struct SeaOrmSettingsStore {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSettingsStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsStore for SeaOrmSettingsStore {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        let result = entity::Entity::find()
            .filter(entity::Column::Name.eq(key))
            .one(&*self.db)
            .await?;

        Ok(result.map(|row| row.value))
    }

    async fn put_string(&self, key: &str, value: &str) -> Result<bool> {
        use sea_orm::ActiveValue::Set;

        // Single-row upsert: replace the prior value under the key if one
        // exists, insert otherwise.
        let existing = entity::Entity::find()
            .filter(entity::Column::Name.eq(key))
            .one(&*self.db)
            .await?;

        let active = entity::ActiveModel {
            name: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(chrono::Utc::now()),
        };

        if existing.is_some() {
            entity::Entity::update(active).exec(&*self.db).await?;
        } else {
            entity::Entity::insert(active).exec(&*self.db).await?;
        }

        Ok(true)
    }
}
