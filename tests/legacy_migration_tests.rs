//! Legacy storage-format tolerance and forward migration tests
//!
//! Values written before the envelope format existed are bare clock face
//! identifiers. Lookups must keep honoring them, and the next apply must
//! replace them with an envelope.

use clockface_service::config::Config;
use clockface_service::domain::repository::CLOCK_FACE_SETTING;
use clockface_service::domain::{Service, StaticClockfaceProvider};
use std::sync::Arc;

mod common;
use common::mocks::{MockSettingsStore, RecordingEventLogger};
use common::TestClockCatalog;

fn build_service(config: Config) -> (MockSettingsStore, Arc<Service>) {
    let store = MockSettingsStore::new();
    let service = Arc::new(Service::new(
        Arc::new(store.clone()),
        Arc::new(StaticClockfaceProvider::new(TestClockCatalog::new().all())),
        Arc::new(RecordingEventLogger::new()),
        config,
    ));
    (store, service)
}

#[tokio::test]
async fn test_legacy_bare_identifier_is_honored_on_lookup() {
    let (store, service) = build_service(Config::default());
    store.seed(CLOCK_FACE_SETTING, "clock_analog_1");

    let current = service.current_clockface().await.unwrap();
    assert_eq!(current.as_deref(), Some("clock_analog_1"));
}

#[tokio::test]
async fn test_legacy_fallback_can_be_disabled() {
    let config = Config {
        legacy_fallback: false,
        ..Config::default()
    };
    let (store, service) = build_service(config);
    store.seed(CLOCK_FACE_SETTING, "clock_analog_1");

    assert_eq!(service.current_clockface().await.unwrap(), None);
}

#[tokio::test]
async fn test_envelope_without_clock_field_reads_as_no_selection() {
    let (store, service) = build_service(Config::default());
    store.seed(CLOCK_FACE_SETTING, r#"{"other":1}"#);

    assert_eq!(service.current_clockface().await.unwrap(), None);
}

#[tokio::test]
async fn test_empty_stored_value_reads_as_no_selection() {
    let (store, service) = build_service(Config::default());
    store.seed(CLOCK_FACE_SETTING, "");

    assert_eq!(service.current_clockface().await.unwrap(), None);
}

#[tokio::test]
async fn test_reapply_migrates_legacy_value_to_envelope() {
    let (store, service) = build_service(Config::default());
    store.seed(CLOCK_FACE_SETTING, "clock_analog_1");

    // The stored value predates the envelope format
    assert!(serde_json::from_str::<serde_json::Value>(&store.raw(CLOCK_FACE_SETTING).unwrap()).is_err());

    let current = service.current_clockface().await.unwrap();
    service.apply(&current.unwrap()).await.unwrap();

    // The same selection is now stored in envelope form
    let raw = store.raw(CLOCK_FACE_SETTING).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["clock"], "clock_analog_1");
    assert!(value["_applied_timestamp"].is_i64());
    assert_eq!(
        service.current_clockface().await.unwrap().as_deref(),
        Some("clock_analog_1")
    );
}
