//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::{ClockApi, ClockError, Clockface};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without transport
/// overhead. Host components hold it as `Arc<dyn ClockApi>`.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ClockApi for NativeClient {
    async fn apply(&self, clockface_id: &str) -> Result<(), ClockError> {
        self.service.apply(clockface_id).await
    }

    async fn current_clockface(&self) -> Result<Option<String>, ClockError> {
        self.service.current_clockface().await
    }

    async fn list_clockfaces(&self) -> Result<Vec<Clockface>, ClockError> {
        self.service.list_clockfaces().await
    }

    async fn is_available(&self) -> bool {
        self.service.is_available().await
    }
}
