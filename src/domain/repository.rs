//! Settings store trait for value persistence
//!
//! This trait defines the interface to the platform settings store.
//! The SeaORM-backed implementation is in infra/storage/repositories.rs

use anyhow::Result;
use async_trait::async_trait;

/// Well-known settings key holding the lock-screen clock face selection
pub const CLOCK_FACE_SETTING: &str = "lock_screen_custom_clock_face";

/// Persistent key-value string store
///
/// Exactly one well-known key ([`CLOCK_FACE_SETTING`]) is used by this
/// service. A handle is always injected through constructors; the store is
/// never reached through ambient state.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any prior value
    ///
    /// Returns `false` when the store rejects the write.
    async fn put_string(&self, key: &str, value: &str) -> Result<bool>;
}
