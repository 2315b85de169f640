//! Clockface provider abstraction
//!
//! This abstraction allows switching between the static built-in set and a
//! platform-backed enumeration without touching the selection service.

use crate::contract::Clockface;
use async_trait::async_trait;

/// Error type for clockface provider operations
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Clockface provider unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid clockface description: {0}")]
    InvalidClockface(String),
}

/// Source of the clock faces available for selection
#[async_trait]
pub trait ClockfaceProvider: Send + Sync {
    /// Enumerate the available clock faces
    async fn list(&self) -> Result<Vec<Clockface>, ProviderError>;

    /// Whether clock face selection is available at all
    ///
    /// Hosts check this before presenting any picker surface.
    async fn is_available(&self) -> bool;
}

/// Provider backed by a fixed in-memory set of clock faces
#[derive(Clone, Default)]
pub struct StaticClockfaceProvider {
    clockfaces: Vec<Clockface>,
}

impl StaticClockfaceProvider {
    /// Create a provider over the given clock faces
    pub fn new(clockfaces: Vec<Clockface>) -> Self {
        Self { clockfaces }
    }
}

#[async_trait]
impl ClockfaceProvider for StaticClockfaceProvider {
    async fn list(&self) -> Result<Vec<Clockface>, ProviderError> {
        Ok(self.clockfaces.clone())
    }

    async fn is_available(&self) -> bool {
        !self.clockfaces.is_empty()
    }
}
