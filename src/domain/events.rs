/// Domain events for the clockface service
///
/// A single event is emitted per successful apply. Delivery is a
/// collaborator concern; implementations may forward to a metrics pipeline,
/// an audit log, or nothing at all.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain event types for clock face selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ClockEvent {
    /// A clock face was applied as the current selection
    ClockApplied(ClockAppliedEvent),
}

/// Event data for a clock face apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockAppliedEvent {
    /// Applied clock face identifier
    pub clockface_id: String,
    /// Timestamp of the apply
    pub applied_at: DateTime<Utc>,
}

impl ClockEvent {
    /// Create a new ClockApplied event
    pub fn applied(clockface_id: impl Into<String>, applied_at: DateTime<Utc>) -> Self {
        ClockEvent::ClockApplied(ClockAppliedEvent {
            clockface_id: clockface_id.into(),
            applied_at,
        })
    }
}

/// Event logger trait notified once per successful apply
///
/// Implementations should not block the apply path on delivery; a returned
/// error is recorded and the apply still succeeds.
#[async_trait::async_trait]
pub trait EventLogger: Send + Sync {
    /// Record that a clock face was applied
    async fn clock_applied(&self, event: ClockEvent) -> anyhow::Result<()>;
}

/// No-op event logger for testing or when logging is disabled
pub struct NoOpEventLogger;

#[async_trait::async_trait]
impl EventLogger for NoOpEventLogger {
    async fn clock_applied(&self, _event: ClockEvent) -> anyhow::Result<()> {
        // No-op: events are not recorded
        Ok(())
    }
}
