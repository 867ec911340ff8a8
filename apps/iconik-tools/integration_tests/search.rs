use crate::helpers::start;

use iconik_tools::cli::CommonArgs;
use iconik_tools::commands::search::{SearchArgs, collect, write_report};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn args(keyframes: bool, json: bool) -> SearchArgs {
    SearchArgs {
        common: CommonArgs::default(),
        title: String::new(),
        tag: "cs101".to_string(),
        exact: false,
        keyframes,
        json,
    }
}

/// **VALUE**: Verifies the search tool prints file names, then one URL per proxy,
/// and keeps going when one asset cannot be signed.
///
/// **BUG THIS CATCHES**: Would catch one failed signing aborting the whole listing.
#[tokio::test]
async fn given_assets_with_proxies_when_searching_then_prints_names_and_urls() {
    // GIVEN: Two assets, the second with a proxy Iconik refuses to sign
    let (server, client, _) = start().await;
    Mock::given(method("POST"))
        .and(path("/API/search/v1/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [
                {"id": "a1", "files": [{"name": "one.mp4"}], "proxies": [{"id": "p1"}]},
                {"id": "a2", "files": [{"name": "two.mp4"}], "proxies": [{"id": "p2"}]}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/assets/a1/proxies/p1/download_url/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://cdn.example/one"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/assets/a2/proxies/p2/download_url/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": ["gone"]})))
        .mount(&server)
        .await;

    // WHEN: Collecting and printing the report
    let report = collect(&client, &args(false, false)).await.unwrap();
    let mut out = Vec::new();
    write_report(&report, false, &mut out).unwrap();

    // THEN: Names, the signed URL and the error line are printed in order
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "one.mp4");
    assert_eq!(lines[1], "two.mp4");
    assert_eq!(lines[2], "https://cdn.example/one");
    assert!(lines[3].starts_with("Error: "));
    assert!(lines[3].contains("gone"));
}

#[tokio::test]
async fn given_keyframes_flag_when_searching_json_then_reports_keyframe_urls() {
    let (server, client, _) = start().await;
    Mock::given(method("POST"))
        .and(path("/API/search/v1/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "a1", "files": [{"name": "one.mp4"}]}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/assets/a1/keyframes/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"type": "KEYFRAME", "url": "https://cdn.example/k.jpg"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = collect(&client, &args(true, true)).await.unwrap();
    let mut out = Vec::new();
    write_report(&report, true, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["file_names"], json!(["one.mp4"]));
    assert_eq!(value["proxy_urls"], json!([]));
    assert_eq!(value["keyframe_urls"][0]["url"], "https://cdn.example/k.jpg");
}

/// **VALUE**: Verifies each proxy of an asset gets its own download URL.
///
/// **BUG THIS CATCHES**: Would catch signing by asset only, which prints the first
/// proxy's URL once per proxy and never prints the others.
#[tokio::test]
async fn given_asset_with_two_proxies_when_searching_then_prints_url_per_proxy() {
    // GIVEN: One asset carrying proxies p1 and p2
    let (server, client, _) = start().await;
    Mock::given(method("POST"))
        .and(path("/API/search/v1/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [
                {"id": "a1", "files": [{"name": "one.mp4"}], "proxies": [{"id": "p1"}, {"id": "p2"}]}
            ]
        })))
        .mount(&server)
        .await;
    for proxy in ["p1", "p2"] {
        Mock::given(method("GET"))
            .and(path(format!("/API/files/v1/assets/a1/proxies/{proxy}/download_url/")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "url": format!("https://cdn.example/{proxy}")
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    // WHEN: Collecting the report
    let report = collect(&client, &args(false, false)).await.unwrap();

    // THEN: Both proxies are listed with their own URL
    let urls: Vec<_> = report.proxy_urls.iter().map(|e| e.url.as_deref()).collect();
    assert_eq!(
        urls,
        vec![Some("https://cdn.example/p1"), Some("https://cdn.example/p2")]
    );
    let proxies: Vec<_> = report.proxy_urls.iter().map(|e| e.proxy_id.as_deref()).collect();
    assert_eq!(proxies, vec![Some("p1"), Some("p2")]);
}

/// **VALUE**: Verifies the search tool lists hits from every result page.
///
/// **BUG THIS CATCHES**: Would catch the tool logging the full match count while only
/// printing the first `per_page` results.
#[tokio::test]
async fn given_results_on_two_pages_when_searching_then_prints_both_pages() {
    // GIVEN: One file name on each of two pages
    let (server, client, _) = start().await;
    Mock::given(method("POST"))
        .and(path("/API/search/v1/search/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "a1", "files": [{"name": "one.mp4"}]}],
            "total": 2,
            "page": 1,
            "pages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/search/v1/search/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "a2", "files": [{"name": "two.mp4"}]}],
            "total": 2,
            "page": 2,
            "pages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Collecting the report
    let report = collect(&client, &args(false, false)).await.unwrap();

    // THEN: File names from both pages are present
    assert_eq!(report.file_names, vec!["one.mp4", "two.mp4"]);
}
