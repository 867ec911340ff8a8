use crate::helpers::start;

use iconik_client::error::IconikClientError;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_asset_with_proxies_when_signing_proxy_url_then_returns_first_url() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/assets/asset-1/proxies/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [
                {"id": "p1", "url": "https://cdn.example/p1.mp4?sig=a"},
                {"id": "p2", "url": "https://cdn.example/p2.mp4?sig=b"}
            ]
        })))
        .mount(&server)
        .await;

    let url = client.generate_signed_proxy_url("asset-1").await.unwrap();

    assert_eq!(url, "https://cdn.example/p1.mp4?sig=a");
}

#[tokio::test]
async fn given_asset_without_proxies_when_signing_proxy_url_then_returns_not_found() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/assets/asset-1/proxies/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": []})))
        .mount(&server)
        .await;

    let result = client.generate_signed_proxy_url("asset-1").await;

    assert!(matches!(result, Err(IconikClientError::NotFound { .. })));
}

#[tokio::test]
async fn given_proxy_id_when_requesting_download_url_then_returns_url() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/assets/asset-1/proxies/p2/download_url/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"url": "https://cdn.example/p2"})),
        )
        .mount(&server)
        .await;

    let url = client.proxy_download_url("asset-1", "p2").await.unwrap();

    assert_eq!(url, "https://cdn.example/p2");
}

/// **VALUE**: Verifies the original-file listing asks Iconik to sign the URLs.
///
/// **BUG THIS CATCHES**: Without `generate_signed_url=true` Iconik returns bare
/// storage paths that cannot be downloaded.
#[tokio::test]
async fn given_asset_when_signing_file_url_then_requests_signed_listing() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/assets/asset-1/files/"))
        .and(query_param("generate_signed_url", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "file-1", "url": "https://b2.example/file?Authorization=x"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = client.generate_signed_file_url("asset-1").await.unwrap();

    assert_eq!(url, "https://b2.example/file?Authorization=x");
}

#[tokio::test]
async fn given_mixed_keyframe_listing_when_fetching_keyframe_then_skips_posters() {
    // GIVEN: A poster image precedes the first keyframe
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/assets/asset-1/keyframes/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [
                {"id": "k0", "type": "POSTER", "url": "https://cdn.example/poster.jpg"},
                {"id": "k1", "type": "KEYFRAME", "url": "https://cdn.example/k1.jpg"}
            ]
        })))
        .mount(&server)
        .await;

    // WHEN: Fetching the keyframe URL
    let url = client.get_keyframe_url("asset-1").await.unwrap();

    // THEN: The first KEYFRAME entry wins
    assert_eq!(url, "https://cdn.example/k1.jpg");
}

/// **VALUE**: Verifies asset ids are escaped before they reach the request path.
///
/// **BUG THIS CATCHES**: Interpolating the raw id turns `?` into a query string, so
/// the request goes to `/files/v1/assets/a` and the proxy list of another asset is used.
#[tokio::test]
async fn given_asset_id_with_reserved_characters_when_signing_proxy_url_then_path_is_encoded() {
    // GIVEN a server that only answers the escaped path
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/assets/a%3Fb/proxies/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "p1", "url": "https://cdn.example/escaped.mp4"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN signing a proxy URL for an id containing `?`
    let url = client.generate_signed_proxy_url("a?b").await.unwrap();

    // THEN the escaped endpoint answered
    assert_eq!(url, "https://cdn.example/escaped.mp4");
}

#[tokio::test]
async fn given_dot_dot_asset_id_when_signing_proxy_url_then_no_request_is_sent() {
    // GIVEN a server that fails the test on any request
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": []})))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN the asset id is a dot segment
    let result = client.generate_signed_proxy_url("..").await;

    // THEN a validation error is returned locally
    assert!(matches!(result, Err(IconikClientError::Validation { .. })));
}
