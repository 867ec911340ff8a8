use crate::credentials::{APP_ID_ENV, AUTH_TOKEN_ENV, Credentials};
use crate::error::ConfigError;

use serial_test::serial;

#[test]
fn given_blank_app_id_when_creating_credentials_then_reports_missing_app_id() {
    match Credentials::new("  ", "token") {
        Err(ConfigError::MissingCredential { name, .. }) => assert_eq!(name, "App ID"),
        other => panic!("Expected MissingCredential, got {other:?}"),
    }
}

#[test]
fn given_empty_token_when_creating_credentials_then_reports_missing_token() {
    match Credentials::new("app", "") {
        Err(ConfigError::MissingCredential { name, .. }) => assert_eq!(name, "Auth token"),
        other => panic!("Expected MissingCredential, got {other:?}"),
    }
}

/// **VALUE**: Verifies debug output of credentials never includes the token.
#[test]
fn given_credentials_when_debug_formatted_then_token_is_redacted() {
    let credentials = Credentials::new("app-id", "very-secret").unwrap();

    let debug = format!("{credentials:?}");

    assert!(debug.contains("app-id"));
    assert!(!debug.contains("very-secret"));
}

#[test]
#[serial]
fn given_env_credentials_when_flags_absent_then_resolves_from_env() {
    // GIVEN: Credentials only in the environment
    unsafe {
        std::env::set_var(APP_ID_ENV, "env-app");
        std::env::set_var(AUTH_TOKEN_ENV, "env-token");
    }

    // WHEN: Resolving without explicit values
    let credentials = Credentials::resolve(None, Some(String::new())).unwrap();

    // THEN: Env values are used
    assert_eq!(credentials.app_id, "env-app");
    assert_eq!(credentials.token.expose(), "env-token");

    unsafe {
        std::env::remove_var(APP_ID_ENV);
        std::env::remove_var(AUTH_TOKEN_ENV);
    }
}

#[test]
#[serial]
fn given_flags_and_env_when_resolving_then_flags_win() {
    unsafe {
        std::env::set_var(APP_ID_ENV, "env-app");
        std::env::set_var(AUTH_TOKEN_ENV, "env-token");
    }

    let credentials =
        Credentials::resolve(Some("flag-app".into()), Some("flag-token".into())).unwrap();

    assert_eq!(credentials.app_id, "flag-app");
    assert_eq!(credentials.token.expose(), "flag-token");

    unsafe {
        std::env::remove_var(APP_ID_ENV);
        std::env::remove_var(AUTH_TOKEN_ENV);
    }
}
