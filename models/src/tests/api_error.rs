use crate::{ApiErrorBody, UNPARSABLE_ERROR_MESSAGE};

/// **VALUE**: Verifies that a well-formed Iconik error body is decoded as-is.
#[test]
fn given_errors_payload_when_parsed_then_keeps_messages() {
    // GIVEN: A standard Iconik error payload
    let body = br#"{"errors": ["Asset not found", "Check the id"]}"#;

    // WHEN: Parsing it
    let parsed = ApiErrorBody::parse_or_sentinel(body);

    // THEN: Messages are preserved in order
    assert_eq!(parsed.errors, vec!["Asset not found", "Check the id"]);
}

/// **VALUE**: Verifies the fallback for bodies that are not JSON at all.
///
/// **BUG THIS CATCHES**: Would catch if a gateway HTML page bubbled up as a JSON
/// decode error instead of the "UNKNOWN; error message not parsable" sentinel.
#[test]
fn given_html_body_when_parsed_then_returns_sentinel() {
    let parsed = ApiErrorBody::parse_or_sentinel(b"<html>502 Bad Gateway</html>");

    assert_eq!(parsed.errors, vec![UNPARSABLE_ERROR_MESSAGE]);
}

#[test]
fn given_errors_with_wrong_shape_when_parsed_then_returns_sentinel() {
    let parsed = ApiErrorBody::parse_or_sentinel(br#"{"errors": {"title": ["required"]}}"#);

    assert_eq!(parsed, ApiErrorBody::sentinel());
}

#[test]
fn given_empty_object_when_parsed_then_returns_no_messages() {
    let parsed = ApiErrorBody::parse_or_sentinel(b"{}");

    assert!(parsed.errors.is_empty());
}
