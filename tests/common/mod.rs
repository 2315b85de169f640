//! Common test utilities, fixtures, and mock collaborators

use clockface_service::Clockface;

// Mock collaborator implementations for testing
pub mod mocks {
    use async_trait::async_trait;
    use clockface_service::domain::events::{ClockEvent, EventLogger};
    use clockface_service::domain::repository::SettingsStore;
    use parking_lot::RwLock;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// In-memory settings store with failure injection
    #[derive(Clone, Default)]
    pub struct MockSettingsStore {
        data: Arc<RwLock<HashMap<String, String>>>,
        reject_writes: Arc<RwLock<bool>>,
        fail_reads: Arc<RwLock<bool>>,
    }

    impl MockSettingsStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed a raw value, bypassing the service
        pub fn seed(&self, key: &str, value: &str) {
            self.data.write().insert(key.to_string(), value.to_string());
        }

        /// Raw value currently stored under `key`
        pub fn raw(&self, key: &str) -> Option<String> {
            self.data.read().get(key).cloned()
        }

        /// Make subsequent writes report rejection
        pub fn reject_writes(&self) {
            *self.reject_writes.write() = true;
        }

        /// Make subsequent reads fail with a transport error
        pub fn fail_reads(&self) {
            *self.fail_reads.write() = true;
        }
    }

    #[async_trait]
    impl SettingsStore for MockSettingsStore {
        async fn get_string(&self, key: &str) -> anyhow::Result<Option<String>> {
            if *self.fail_reads.read() {
                anyhow::bail!("settings store unavailable");
            }
            Ok(self.data.read().get(key).cloned())
        }

        async fn put_string(&self, key: &str, value: &str) -> anyhow::Result<bool> {
            if *self.reject_writes.read() {
                return Ok(false);
            }
            self.data.write().insert(key.to_string(), value.to_string());
            Ok(true)
        }
    }

    /// Event logger that records every delivered event
    #[derive(Clone, Default)]
    pub struct RecordingEventLogger {
        events: Arc<RwLock<Vec<ClockEvent>>>,
        fail: Arc<RwLock<bool>>,
    }

    impl RecordingEventLogger {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<ClockEvent> {
            self.events.read().clone()
        }

        /// Make subsequent deliveries fail
        pub fn fail_deliveries(&self) {
            *self.fail.write() = true;
        }
    }

    #[async_trait]
    impl EventLogger for RecordingEventLogger {
        async fn clock_applied(&self, event: ClockEvent) -> anyhow::Result<()> {
            if *self.fail.read() {
                anyhow::bail!("event pipeline unavailable");
            }
            self.events.write().push(event);
            Ok(())
        }
    }
}

/// Clock face set mirroring a typical device catalog
#[derive(Debug, Clone)]
pub struct TestClockCatalog {
    pub analog: Clockface,
    pub digital: Clockface,
    pub world: Clockface,
}

impl TestClockCatalog {
    /// Create the catalog used across the integration tests
    pub fn new() -> Self {
        Self {
            analog: Clockface::new("clock_analog_1", "Analog"),
            digital: Clockface::new("clock_digital_bold", "Bold Digital"),
            world: Clockface::new("clock_world", "World Clock"),
        }
    }

    /// All catalog entries, picker order
    pub fn all(&self) -> Vec<Clockface> {
        vec![
            self.analog.clone(),
            self.digital.clone(),
            self.world.clone(),
        ]
    }
}

impl Default for TestClockCatalog {
    fn default() -> Self {
        Self::new()
    }
}
