//! Domain service - clock selection orchestration

use super::codec::{self, StoredClockValue};
use super::events::{ClockEvent, EventLogger};
use super::provider::ClockfaceProvider;
use super::repository::{SettingsStore, CLOCK_FACE_SETTING};
use crate::config::Config;
use crate::contract::{ClockError, Clockface};
use chrono::Utc;
use std::sync::Arc;

/// Domain service for clock face selection
///
/// Stateless beyond its collaborators: a single apply is one encode and one
/// store write, a single lookup is one store read and one decode.
pub struct Service {
    store: Arc<dyn SettingsStore>,
    provider: Arc<dyn ClockfaceProvider>,
    event_logger: Arc<dyn EventLogger>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        store: Arc<dyn SettingsStore>,
        provider: Arc<dyn ClockfaceProvider>,
        event_logger: Arc<dyn EventLogger>,
        config: Config,
    ) -> Self {
        Self {
            store,
            provider,
            event_logger,
            config,
        }
    }

    /// Persist `clockface_id` as the current lock-screen selection
    ///
    /// On success the store holds a fresh envelope value and the event
    /// logger has been notified exactly once.
    pub async fn apply(&self, clockface_id: &str) -> Result<(), ClockError> {
        super::validation::validate_clockface_id(clockface_id, &self.config)?;

        let applied_at = Utc::now();
        let value = codec::encode(clockface_id, applied_at)?;

        let written = self
            .store
            .put_string(CLOCK_FACE_SETTING, &value)
            .await
            .map_err(|err| {
                tracing::error!(%err, key = CLOCK_FACE_SETTING, "settings store write failed");
                ClockError::StoreWrite {
                    key: CLOCK_FACE_SETTING.to_string(),
                }
            })?;
        if !written {
            tracing::warn!(key = CLOCK_FACE_SETTING, "settings store rejected write");
            return Err(ClockError::StoreWrite {
                key: CLOCK_FACE_SETTING.to_string(),
            });
        }

        let event = ClockEvent::applied(clockface_id, applied_at);
        if let Err(err) = self.event_logger.clock_applied(event).await {
            // The selection is already durable; delivery is best-effort.
            tracing::warn!(%err, clockface_id, "failed to record clock applied event");
        }

        tracing::debug!(clockface_id, "clock face applied");
        Ok(())
    }

    /// Read back the currently selected clock face identifier
    ///
    /// Returns `Ok(None)` when no clock face has been explicitly selected,
    /// and also when a stored envelope carries no usable identifier.
    pub async fn current_clockface(&self) -> Result<Option<String>, ClockError> {
        let raw = self
            .store
            .get_string(CLOCK_FACE_SETTING)
            .await
            .map_err(|_| ClockError::Internal)?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match codec::parse_stored(&raw) {
            Some(StoredClockValue::Envelope(envelope)) => Ok(Some(envelope.clock)),
            Some(StoredClockValue::Legacy(id)) if self.config.legacy_fallback => Ok(Some(id)),
            Some(StoredClockValue::Legacy(_)) => {
                tracing::warn!("legacy clock value present but legacy fallback is disabled");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Enumerate the clock faces available for selection
    pub async fn list_clockfaces(&self) -> Result<Vec<Clockface>, ClockError> {
        self.provider
            .list()
            .await
            .map_err(|err| ClockError::Provider {
                message: err.to_string(),
            })
    }

    /// Whether clock face selection is available on this device
    pub async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }
}
