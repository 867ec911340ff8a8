use crate::client::path_segment;
use crate::config::ClientConfig;
use crate::error::IconikClientError;
use crate::credentials::Credentials;
use crate::{ICONIK_API_BASE_URL, IconikClient};

fn credentials() -> Credentials {
    Credentials::new("app-id", "token").unwrap()
}

#[test]
fn given_host_without_trailing_slash_when_client_created_then_slash_is_appended() {
    let config = ClientConfig {
        host: "https://eu.iconik.io/API".to_string(),
        ..ClientConfig::default()
    };

    let client = IconikClient::new(credentials(), &config).unwrap();

    assert_eq!(client.base_url().as_str(), "https://eu.iconik.io/API/");
}

/// **VALUE**: Verifies endpoints join beneath the API prefix instead of replacing it.
///
/// **BUG THIS CATCHES**: Without the trailing slash `Url::join` drops the last path
/// segment, sending every request to `/search/v1/...` instead of `/API/search/v1/...`.
#[test]
fn given_normalised_host_when_endpoint_joined_then_keeps_api_prefix() {
    let config = ClientConfig {
        host: "https://eu.iconik.io/API".to_string(),
        ..ClientConfig::default()
    };
    let client = IconikClient::new(credentials(), &config).unwrap();

    let url = client.endpoint("search/v1/search/").unwrap();

    assert_eq!(url.as_str(), "https://eu.iconik.io/API/search/v1/search/");
}

#[test]
fn given_blank_host_when_client_created_then_uses_default_api_base() {
    let config = ClientConfig {
        host: "  ".to_string(),
        ..ClientConfig::default()
    };

    let client = IconikClient::new(credentials(), &config).unwrap();

    assert_eq!(client.base_url().as_str(), ICONIK_API_BASE_URL);
    assert_eq!(client.app_id(), "app-id");
}

#[test]
fn given_unparsable_host_when_client_created_then_returns_url_error() {
    let config = ClientConfig {
        host: "not a url".to_string(),
        ..ClientConfig::default()
    };

    let result = IconikClient::new(credentials(), &config);

    assert!(matches!(
        result.map(|_| ()),
        Err(crate::error::IconikClientError::UrlParse { .. })
    ));
}

/// **VALUE**: Verifies ids are encoded as a single path segment.
///
/// **BUG THIS CATCHES**: An id carrying `?`, `#` or `/` would otherwise start a query,
/// a fragment or a new segment, so the request would hit a different endpoint.
#[test]
fn given_id_with_reserved_characters_when_encoded_then_stays_one_segment() {
    // GIVEN an id containing query, fragment and path separators
    let id = "a?b#c/../d";

    // WHEN encoding it as a path segment
    let segment = path_segment(id).unwrap();

    // THEN every reserved character is escaped
    assert_eq!(segment, "a%3Fb%23c%2F..%2Fd");
}

#[test]
fn given_unreserved_id_when_encoded_then_is_unchanged() {
    assert_eq!(path_segment("abc-123_x.y~z").unwrap(), "abc-123_x.y~z");
}

/// **VALUE**: Verifies dot-segment ids are refused before any request is built.
///
/// **BUG THIS CATCHES**: `Url::join` resolves `..` (encoded or not) against the base,
/// so an asset id of `..` would silently address the parent collection endpoint.
#[test]
fn given_dot_segment_or_empty_id_when_encoded_then_returns_validation_error() {
    for id in ["", ".", ".."] {
        // WHEN encoding the id
        let result = path_segment(id);

        // THEN it is rejected
        assert!(
            matches!(result, Err(IconikClientError::Validation { .. })),
            "id {id:?} should be rejected"
        );
    }
}
