use crate::error::{IconikClientError, UploadError};

use models::UNPARSABLE_ERROR_MESSAGE;

/// **VALUE**: Verifies an API error message lists Iconik's messages, the status and
/// the location.
#[test]
fn given_api_error_body_when_formatted_then_includes_status_and_messages() {
    let err = IconikClientError::from_response(400, br#"{"errors": ["title required", "bad type"]}"#);

    let text = err.to_string();

    assert!(text.contains("HTTP 400"));
    assert!(text.contains("title required; bad type"));
    assert!(text.contains("error.rs"));
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.error_category(), "client_error");
}

#[test]
fn given_unparsable_body_when_converted_then_uses_sentinel() {
    let err = IconikClientError::from_response(500, b"Internal Server Error");

    assert_eq!(
        err.api_errors(),
        Some(&[UNPARSABLE_ERROR_MESSAGE.to_string()][..])
    );
    assert_eq!(err.error_category(), "server_error");
}

#[test]
fn given_401_when_categorised_then_reports_auth() {
    let err = IconikClientError::from_response(401, br#"{"errors": ["Unauthorized"]}"#);

    assert_eq!(err.error_category(), "auth");
}

#[test]
fn given_wrapped_client_error_when_status_requested_then_propagates() {
    let err = UploadError::from(IconikClientError::from_response(404, b"{}"));

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(UploadError::transfer(503, "busy").status_code(), Some(503));
}
