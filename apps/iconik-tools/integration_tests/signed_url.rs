use iconik_tools::commands::signed_url::fetch_and_report;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_signed_url_when_fetched_then_prints_status_and_headers() {
    // GIVEN: Storage answering the signed URL
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bucket/week1.mp4"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-bz-file-id", "b2-file-1")
                .set_body_bytes(b"video".to_vec()),
        )
        .expect(1)
        .mount(&server)
        .await;
    let url = format!("{}/bucket/week1.mp4", server.uri());

    // WHEN: Probing it
    let mut out = Vec::new();
    fetch_and_report(&reqwest::Client::new(), &url, &mut out).await.unwrap();

    // THEN: Status and headers are printed
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Status Code: 200\nResponse Headers:\n"));
    assert!(text.contains("x-bz-file-id: b2-file-1"));
}
