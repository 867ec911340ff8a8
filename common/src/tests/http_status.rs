use crate::HttpStatusCode;

/// **VALUE**: Verifies status classification used to decide whether an Iconik
/// response is decoded or turned into an API error.
///
/// **BUG THIS CATCHES**: Would catch a regression to the old "only 200 is OK" rule,
/// which rejected the 201 responses Iconik returns for created objects.
#[test]
fn given_2xx_codes_when_checked_then_all_are_success() {
    for code in [200, 201, 202, 204] {
        assert!(HttpStatusCode(code).is_success(), "{code} should be success");
    }
    assert!(!HttpStatusCode(301).is_success());
    assert!(!HttpStatusCode(404).is_success());
}

#[test]
fn given_error_codes_when_classified_then_client_and_server_ranges_split() {
    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(404).is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(503).is_client_error());
}

#[test]
fn given_401_and_403_when_checked_then_reported_as_auth_failure() {
    assert!(HttpStatusCode(401).is_auth_failure());
    assert!(HttpStatusCode(403).is_auth_failure());
    assert!(!HttpStatusCode(400).is_auth_failure());
}

#[test]
fn given_status_code_when_displayed_then_prints_number() {
    assert_eq!(HttpStatusCode::from(418).to_string(), "418");
}
