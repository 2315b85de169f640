//! Domain layer - business logic and services

pub mod codec;
pub mod events;
pub mod provider;
pub mod repository;
pub mod service;
pub mod validation;

pub use codec::{ClockEnvelope, StoredClockValue};
pub use events::{ClockEvent, EventLogger, NoOpEventLogger};
pub use provider::{ClockfaceProvider, ProviderError, StaticClockfaceProvider};
pub use repository::{SettingsStore, CLOCK_FACE_SETTING};
pub use service::Service;
