use crate::helpers::start;

use iconik_client::error::IconikClientError;
use models::UNPARSABLE_ERROR_MESSAGE;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies a non-2xx response carries Iconik's own error messages.
///
/// **BUG THIS CATCHES**: Would catch the body being dropped, leaving the user with
/// a bare status code and no hint of which field Iconik rejected.
#[tokio::test]
async fn given_api_error_body_when_request_fails_then_error_carries_messages() {
    // GIVEN: Iconik rejects the asset
    let (server, client) = start().await;
    Mock::given(method("POST"))
        .and(path("/API/assets/v1/assets/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"errors": ["title: field required"]})),
        )
        .mount(&server)
        .await;

    // WHEN: Creating the asset
    let result = client
        .create_asset(&models::CreateAssetRequest::new(""))
        .await;

    // THEN: Status and message are preserved
    match result {
        Err(IconikClientError::Api { status, errors, .. }) => {
            assert_eq!(status.0, 400);
            assert_eq!(errors, vec!["title: field required".to_string()]);
        }
        Err(other) => panic!("Expected Api error, got {other}"),
        Ok(asset) => panic!("Expected Api error, got {asset:?}"),
    }
}

#[tokio::test]
async fn given_html_error_page_when_request_fails_then_uses_unparsable_sentinel() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/assets/asset-1/proxies/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client
        .generate_signed_proxy_url("asset-1")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(502));
    assert_eq!(
        err.api_errors(),
        Some(&[UNPARSABLE_ERROR_MESSAGE.to_string()][..])
    );
    assert_eq!(err.error_category(), "server_error");
}

#[tokio::test]
async fn given_invalid_token_when_request_fails_then_categorised_as_auth() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/storages/matching/FILES/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"errors": ["Invalid token"]})),
        )
        .mount(&server)
        .await;

    let err = client.default_storage("FILES").await.unwrap_err();

    assert_eq!(err.error_category(), "auth");
}

#[tokio::test]
async fn given_success_with_garbage_body_when_decoding_then_returns_json_error() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/storages/matching/FILES/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.default_storage("FILES").await.unwrap_err();

    assert_eq!(err.error_category(), "json");
}
