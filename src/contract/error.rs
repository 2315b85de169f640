//! Contract error types for the clockface service
//!
//! These errors are transport-agnostic and used for in-process communication.

/// Clockface service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// Clockface identifier rejected before persisting
    Validation {
        /// Validation error message
        message: String,
    },
    /// Envelope serialization failed for the given selection
    Encode {
        /// Clockface identifier that failed to encode
        clockface_id: String,
    },
    /// The settings store rejected the write
    StoreWrite {
        /// Settings key the write targeted
        key: String,
    },
    /// Clockface provider failed to enumerate available faces
    Provider {
        /// Provider error message
        message: String,
    },
    /// Internal error
    Internal,
}

impl std::fmt::Display for ClockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::Encode { clockface_id } => {
                write!(f, "Failed to encode clock selection: {}", clockface_id)
            }
            Self::StoreWrite { key } => {
                write!(f, "Settings store rejected write for key: {}", key)
            }
            Self::Provider { message } => {
                write!(f, "Clockface provider error: {}", message)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for ClockError {}
