use super::*;

#[test]
fn editor_theme_follows_page_theme() {
    assert_eq!(editor_theme(Theme::Dark), "dark");
    assert_eq!(editor_theme(Theme::Light), "default");
}

#[test]
fn options_serialize_with_editor_field_names() {
    let options = MarkdownEditorOptions::new("# Title", "500px", Theme::Dark);
    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "height": "500px",
            "initialValue": "# Title",
            "previewStyle": "tab",
            "previewHighlight": false,
            "plugins": [],
            "hideModeSwitch": true,
            "autofocus": false,
            "theme": "dark",
        })
    );
}

#[test]
fn options_keep_textarea_value_verbatim() {
    let raw = "line one\n\n  - item\n";
    assert_eq!(MarkdownEditorOptions::new(raw, "1px", Theme::Light).initial_value, raw);
}
