// Unit tests for error module
// Tests JSON reporting and conversion from library errors

use crate::error::ToolError;

use iconik_client::error::{IconikClientError, UploadError};

/// **VALUE**: Tests that errors can be serialized for `--json` reporting.
///
/// **BUG THIS CATCHES**: Would catch if someone removes the `#[derive(Serialize)]`
/// or adds a non-serializable field.
#[test]
fn given_tool_error_when_serialized_then_succeeds() {
    // GIVEN: A ToolError
    let err = ToolError::tool("Test");

    // WHEN: Serializing to JSON
    let result = serde_json::to_string(&err);

    // THEN: Should succeed
    assert!(result.is_ok(), "Error should be serializable");

    // AND: Should contain the error data
    let json = result.unwrap();
    assert!(json.contains("Tool"), "JSON should contain variant name");
    assert!(json.contains("Test"), "JSON should contain message");
}

#[test]
fn given_api_failure_when_converted_then_keeps_status_and_category() {
    let source = IconikClientError::from_response(403, br#"{"errors": ["Forbidden"]}"#);

    let err = ToolError::from(source);

    match &err {
        ToolError::Iconik {
            category, status, message, ..
        } => {
            assert_eq!(category, "auth");
            assert_eq!(*status, Some(403));
            assert!(message.contains("Forbidden"));
        }
        other => panic!("Expected Iconik variant, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Iconik Error (auth)"));
}

#[test]
fn given_transfer_failure_when_converted_then_keeps_status() {
    let err = ToolError::from(UploadError::transfer(503, "busy"));

    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(json["type"], "Upload");
    assert_eq!(json["data"]["status"], 503);
}
