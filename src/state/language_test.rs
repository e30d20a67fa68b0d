use super::*;

struct FixedDetector(Option<&'static str>);

impl LanguageDetector for FixedDetector {
    fn detect(&self, _code: &str) -> Option<String> {
        self.0.map(str::to_owned)
    }
}

// =============================================================
// Table
// =============================================================

#[test]
fn ids_are_unique() {
    for (i, a) in Language::ALL.iter().enumerate() {
        for b in &Language::ALL[i + 1..] {
            assert_ne!(a.id(), b.id());
        }
    }
}

#[test]
fn highlighter_names_map_back_except_shared_grammar() {
    for lang in Language::ALL {
        let mapped = Language::from_highlighter_name(lang.highlighter_name());
        if lang == Language::Jinja {
            assert_eq!(mapped, Some(Language::Django));
        } else {
            assert_eq!(mapped, Some(lang));
        }
    }
}

#[test]
fn highlighter_name_lookup_ignores_case() {
    assert_eq!(Language::from_highlighter_name("Python"), Some(Language::Python));
    assert_eq!(Language::from_highlighter_name("CPP"), Some(Language::Cpp));
}

#[test]
fn unmapped_highlighter_name_is_none() {
    assert_eq!(Language::from_highlighter_name("arduino"), None);
    assert_eq!(Language::from_highlighter_name(""), None);
}

#[test]
fn display_uses_label() {
    assert_eq!(Language::Csharp.to_string(), "C#");
    assert_eq!(Language::Plaintext.id(), "PLAINTEXT");
}

// =============================================================
// Detection
// =============================================================

#[test]
fn detection_maps_into_table() {
    let found = detect_language(&FixedDetector(Some("Rust")), "fn main() {}").unwrap();
    assert_eq!(found.language, Language::Rust);
    assert_eq!(found.detector_name, "rust");
}

#[test]
fn blank_content_skips_detector() {
    assert_eq!(detect_language(&FixedDetector(Some("rust")), "  \n\t"), None);
}

#[test]
fn unmapped_detection_counts_as_none() {
    assert_eq!(detect_language(&FixedDetector(Some("arduino")), "void setup() {}"), None);
}

#[test]
fn submit_with_empty_content_is_plaintext() {
    assert_eq!(language_for_submit(&FixedDetector(Some("python")), ""), Language::Plaintext);
}

#[test]
fn submit_without_detection_is_plaintext() {
    assert_eq!(language_for_submit(&FixedDetector(None), "???"), Language::Plaintext);
}

#[test]
fn submit_uses_detected_language() {
    assert_eq!(language_for_submit(&FixedDetector(Some("go")), "package main"), Language::Go);
}
