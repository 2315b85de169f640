//! Stored clock setting codec
//!
//! Bidirectional mapping between a clock face identifier and its persisted
//! string form. Values written by this service are a JSON envelope carrying
//! the identifier and an apply timestamp; values written before the envelope
//! format existed are bare identifiers and must still decode.

use crate::contract::ClockError;
use chrono::{DateTime, Utc};

/// JSON field holding the clock face identifier
const CLOCK_FIELD: &str = "clock";
/// JSON field holding the apply timestamp (milliseconds since epoch)
const TIMESTAMP_FIELD: &str = "_applied_timestamp";

/// Envelope form of a persisted clock face selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockEnvelope {
    /// Clock face identifier
    pub clock: String,
    /// Milliseconds since epoch at apply time; absent in hand-edited values
    pub applied_at_ms: Option<i64>,
}

/// A value read back from the settings store, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredClockValue {
    /// Envelope format written by this service
    Envelope(ClockEnvelope),
    /// Bare identifier predating the envelope format
    Legacy(String),
}

impl StoredClockValue {
    /// The clock face identifier carried by this value
    pub fn clockface_id(&self) -> &str {
        match self {
            Self::Envelope(envelope) => &envelope.clock,
            Self::Legacy(id) => id,
        }
    }
}

/// Encode a clock face selection into its persisted envelope form
///
/// Pure function; the caller supplies the timestamp so apply operations are
/// deterministic under test.
pub fn encode(clockface_id: &str, now: DateTime<Utc>) -> Result<String, ClockError> {
    let envelope = serde_json::json!({
        CLOCK_FIELD: clockface_id,
        TIMESTAMP_FIELD: now.timestamp_millis(),
    });

    serde_json::to_string(&envelope).map_err(|err| {
        tracing::error!(%err, clockface_id, "failed to encode clock selection envelope");
        ClockError::Encode {
            clockface_id: clockface_id.to_string(),
        }
    })
}

/// Parse a raw stored value into its recognized form
///
/// Ordered, first match wins:
/// 1. an empty value yields `None`;
/// 2. anything that does not parse as a JSON object is a legacy bare
///    identifier and is returned unchanged;
/// 3. a JSON object with a string `clock` field yields the envelope,
///    unknown fields ignored;
/// 4. a JSON object without a usable `clock` field yields `None` and a
///    diagnostic record.
pub fn parse_stored(raw: &str) -> Option<StoredClockValue> {
    if raw.is_empty() {
        return None;
    }

    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "stored clock value is not valid JSON, treating as legacy identifier");
            return Some(StoredClockValue::Legacy(raw.to_string()));
        }
    };

    let Some(fields) = value.as_object() else {
        // JSON scalars and arrays predate the envelope format just as
        // unparseable text does.
        tracing::warn!("stored clock value is not a JSON object, treating as legacy identifier");
        return Some(StoredClockValue::Legacy(raw.to_string()));
    };

    match fields.get(CLOCK_FIELD).and_then(|v| v.as_str()) {
        Some(id) => Some(StoredClockValue::Envelope(ClockEnvelope {
            clock: id.to_string(),
            applied_at_ms: fields.get(TIMESTAMP_FIELD).and_then(|v| v.as_i64()),
        })),
        None => {
            tracing::warn!("stored clock envelope does not contain a clock field");
            None
        }
    }
}

/// Decode a raw stored value into a clock face identifier
pub fn decode(raw: &str) -> Option<String> {
    parse_stored(raw).map(|value| value.clockface_id().to_string())
}
