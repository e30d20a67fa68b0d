use super::*;

#[test]
fn status_error_message_includes_code() {
    assert_eq!(ClientError::Status(502).to_string(), "unexpected status: 502");
}

#[test]
fn request_error_message_wraps_source() {
    let err = ClientError::Request("connection reset".to_owned());
    assert_eq!(err.to_string(), "request failed: connection reset");
}

#[test]
fn unavailable_has_fixed_message() {
    assert_eq!(ClientError::Unavailable.to_string(), "not available outside the browser");
}
