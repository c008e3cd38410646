//! WASM-target tests for widget-types.
//!
//! Runs under wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use widget_types::config::*;
use widget_types::event::*;
use widget_types::message::*;
use widget_types::session::SessionId;
use widget_types::WidgetError;

#[wasm_bindgen_test]
fn message_timestamp_available_on_wasm() {
    let msg = Message::new(MessageId(1), Sender::User, "hi");
    assert!(msg.timestamp().timestamp() > 0);
}

#[wasm_bindgen_test]
fn session_id_generates_on_wasm() {
    let id = SessionId::new();
    assert_eq!(id.as_str().len(), 36);
}

#[wasm_bindgen_test]
fn config_roundtrip() {
    let config = WidgetConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: WidgetConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[wasm_bindgen_test]
fn config_validation() {
    let mut config = WidgetConfig::default();
    config.colors.text = "#zzz".to_string();
    assert!(matches!(
        config.validate(),
        Err(WidgetError::ConfigurationInvalid { .. })
    ));
    assert!(config.sanitized().validate().is_ok());
}

#[wasm_bindgen_test]
fn visibility_default() {
    assert_eq!(Visibility::default(), Visibility::Closed);
}
