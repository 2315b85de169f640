//! Storage infrastructure for the clockface service

pub mod entity;
pub mod migrations;
pub mod repositories;

pub use repositories::SeaOrmSettingsStore;
