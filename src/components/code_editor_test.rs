use super::*;

#[test]
fn detection_label_uses_display_name() {
    let detection = Detection {
        language: Language::Cpp,
        detector_name: "cpp".to_owned(),
    };
    assert_eq!(detection_label(&detection), "Detected: C++");
}

#[test]
fn submit_value_prefers_detected_language() {
    assert_eq!(submit_value(Language::Python, |_| true), Some("PYTHON"));
}

#[test]
fn submit_value_falls_back_to_plaintext_when_option_missing() {
    assert_eq!(submit_value(Language::Wasm, |id| id != "WASM"), Some("PLAINTEXT"));
}

#[test]
fn submit_value_plaintext_for_plaintext() {
    assert_eq!(submit_value(Language::Plaintext, |_| true), Some("PLAINTEXT"));
}

#[test]
fn submit_value_none_without_any_option() {
    assert_eq!(submit_value(Language::Go, |_| false), None);
}
