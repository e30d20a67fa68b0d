use super::*;

#[test]
fn copy_button_is_always_visible() {
    assert!(!CopyButtonOptions::default().autohide);
}

#[test]
fn copy_button_options_serialize_for_plugin() {
    let json = serde_json::to_value(CopyButtonOptions::default()).unwrap();
    assert_eq!(json, serde_json::json!({ "autohide": false }));
}

#[test]
fn code_block_selector_targets_pre_code() {
    assert_eq!(CODE_BLOCK_SELECTOR, "pre code");
}
