//! Contract models for the clockface service
//!
//! These models are transport-agnostic and used for in-process communication.
//! NO serde derives - these are pure domain models.

/// A selectable lock-screen clock face as supplied by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clockface {
    /// Opaque clock face identifier (e.g., "clock_analog_1")
    pub id: String,
    /// Human-readable title shown by picker surfaces
    pub title: String,
}

impl Clockface {
    /// Create a clockface description
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
