use super::*;

#[test]
fn selected_id_without_fragment_targets_snippet_element() {
    assert_eq!(scroll_target("?selected_id=42", ""), Some("snippet-42".to_owned()));
}

#[test]
fn fragment_suppresses_scroll() {
    assert_eq!(scroll_target("?selected_id=42", "#comments"), None);
}

#[test]
fn bare_hash_is_not_a_fragment() {
    assert_eq!(scroll_target("?selected_id=42", "#"), Some("snippet-42".to_owned()));
}

#[test]
fn missing_or_empty_param_means_no_scroll() {
    assert_eq!(scroll_target("", ""), None);
    assert_eq!(scroll_target("?page=2", ""), None);
    assert_eq!(scroll_target("?selected_id=", ""), None);
}

#[test]
fn param_is_found_among_others_and_decoded() {
    assert_eq!(query_param("?q=rust&selected_id=a%2Fb", "selected_id"), Some("a/b".to_owned()));
    assert_eq!(query_param("selected_id=7&selected_id=8", "selected_id"), Some("7".to_owned()));
}
