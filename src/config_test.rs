use super::*;

#[test]
fn defaults_match_stock_behavior() {
    let config = ClientConfig::default();
    assert_eq!(config.log_level, "info");
    assert_eq!(config.api_base, "");
    assert_eq!(config.copy_feedback_ms, 1000);
    assert_eq!(config.copy_feedback_label, "Copied!");
    assert_eq!(config.copy_feedback_class, "!bg-green-400");
    assert_eq!(config.dropdown_search_placeholder, "Search...");
    assert_eq!(config.markdown_editor_height, "500px");
}

#[test]
fn blank_block_yields_defaults() {
    assert_eq!(ClientConfig::from_json("  \n ").unwrap(), ClientConfig::default());
}

#[test]
fn partial_block_overrides_only_given_fields() {
    let config = ClientConfig::from_json(r#"{"api_base": "/app", "copy_feedback_ms": 250}"#).unwrap();
    assert_eq!(config.api_base, "/app");
    assert_eq!(config.copy_feedback_ms, 250);
    assert_eq!(config.copy_feedback_label, "Copied!");
}

#[test]
fn unknown_fields_are_ignored() {
    let config = ClientConfig::from_json(r#"{"log_level": "debug", "extra": true}"#).unwrap();
    assert_eq!(config.log_level, "debug");
}

#[test]
fn malformed_block_is_decode_error() {
    let err = ClientConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[test]
fn wrong_field_type_is_decode_error() {
    let err = ClientConfig::from_json(r#"{"copy_feedback_ms": "soon"}"#).unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}
