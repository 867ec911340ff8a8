use crate::RedactedToken;

/// **VALUE**: Verifies that the Auth-Token never shows up in debug output.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` sneaking back in, which would
/// leak credentials into `--debug` logs.
#[test]
fn given_token_when_debug_formatted_then_value_is_hidden() {
    // GIVEN: A token
    let token = RedactedToken::new("super-secret-token");

    // WHEN: Formatting with Debug and Display
    let debug = format!("{:?}", token);
    let display = format!("{}", token);

    // THEN: Neither contains the secret
    assert!(!debug.contains("super-secret-token"));
    assert!(!display.contains("super-secret-token"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn given_token_when_exposed_then_returns_original_value() {
    let token = RedactedToken::from("abc123");

    assert_eq!(token.expose(), "abc123");
    assert!(!token.is_empty());
}

/// **VALUE**: Verifies serialization is refused so tokens cannot end up in JSON payloads.
#[test]
fn given_token_when_serialized_then_returns_error() {
    let token = RedactedToken::new("abc123");

    let result = serde_json::to_string(&token);

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("cannot be serialized"));
}
