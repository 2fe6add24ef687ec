use super::*;

#[test]
fn validation_displays_message_verbatim() {
    let err = ApiError::Validation("PDF path, from and to tokens are required".to_owned());
    assert_eq!(err.to_string(), "PDF path, from and to tokens are required");
}

#[test]
fn backend_displays_message_verbatim() {
    let err = ApiError::Backend("PDF not found: /tmp/x.pdf".to_owned());
    assert_eq!(err.to_string(), "PDF not found: /tmp/x.pdf");
}

#[test]
fn network_display_carries_prefix() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "Network error: connection refused");
}
