//! Module declaration and lifecycle wiring

use crate::config::Config;
use crate::contract::ClockApi;
use crate::domain::{ClockfaceProvider, EventLogger, Service};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Clockface service module
///
/// Composition root: owns the configuration and the wired domain service,
/// and hands out the native client host components consume.
pub struct ClockfaceServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for ClockfaceServiceModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl ClockfaceServiceModule {
    /// Create a module with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
        }
    }

    /// Run database migrations for the settings store
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Clockface service migrations completed");
        Ok(())
    }

    /// Wire the store, provider, and event logger into the domain service
    pub fn init(
        &self,
        db: Arc<DatabaseConnection>,
        provider: Arc<dyn ClockfaceProvider>,
        event_logger: Arc<dyn EventLogger>,
    ) -> Result<()> {
        let config = self.config.read().clone();

        // Build the settings store
        let store = Arc::new(crate::infra::storage::repositories::SeaOrmSettingsStore::new(db));

        // Build the domain service
        let service = Arc::new(Service::new(store, provider, event_logger, config));
        *self.service.write() = Some(service);

        tracing::info!("Clockface service initialized");
        Ok(())
    }

    /// Native client for in-process calls
    pub fn client(&self) -> Result<Arc<dyn ClockApi>> {
        let service = self
            .service
            .read()
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))?
            .clone();

        Ok(Arc::new(crate::api::native::NativeClient::new(service)))
    }
}
