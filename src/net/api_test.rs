use super::*;

#[test]
fn toggle_endpoint_formats_expected_path() {
    assert_eq!(toggle_favorite_endpoint("", "42"), "/snippets/42/toggle-favorite/");
}

#[test]
fn toggle_endpoint_respects_base_without_double_slash() {
    assert_eq!(toggle_favorite_endpoint("/app/", "42"), "/app/snippets/42/toggle-favorite/");
    assert_eq!(toggle_favorite_endpoint("/app", "42"), "/app/snippets/42/toggle-favorite/");
}

#[test]
fn decode_reads_is_favorite() {
    assert_eq!(decode_toggle_response(r#"{"is_favorite": true}"#), Ok(true));
    assert_eq!(decode_toggle_response(r#"{"is_favorite": false, "id": 3}"#), Ok(false));
}

#[test]
fn decode_accepts_favorite_alias() {
    assert_eq!(decode_toggle_response(r#"{"favorite": true}"#), Ok(true));
}

#[test]
fn decode_rejects_missing_or_mistyped_field() {
    assert!(matches!(decode_toggle_response("{}"), Err(ClientError::Decode(_))));
    assert!(matches!(decode_toggle_response(r#"{"is_favorite": "yes"}"#), Err(ClientError::Decode(_))));
    assert!(matches!(decode_toggle_response("<html>"), Err(ClientError::Decode(_))));
}

#[test]
fn http_api_is_unavailable_natively() {
    let api = HttpFavoriteApi::new("");
    let result = futures::executor::block_on(api.toggle_favorite("1"));
    assert_eq!(result, Err(ClientError::Unavailable));
}
