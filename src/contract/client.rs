//! Native client trait for in-process communication
//!
//! This trait defines the API that host components (e.g. a picker surface)
//! use to interact with the clockface service. NO HTTP - direct function
//! calls for performance.

use super::{error::ClockError, model::Clockface};
use async_trait::async_trait;

/// Clockface service API for in-process communication
#[async_trait]
pub trait ClockApi: Send + Sync {
    /// Persist the given clock face as the current lock-screen selection
    async fn apply(&self, clockface_id: &str) -> Result<(), ClockError>;

    /// Read back the currently selected clock face identifier
    ///
    /// Returns `None` when no clock face has been explicitly selected.
    async fn current_clockface(&self) -> Result<Option<String>, ClockError>;

    /// Enumerate the clock faces available for selection
    async fn list_clockfaces(&self) -> Result<Vec<Clockface>, ClockError>;

    /// Whether clock face selection is available on this device
    async fn is_available(&self) -> bool;
}
