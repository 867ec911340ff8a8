use crate::helpers::{APP_ID, AUTH_TOKEN, start};

use iconik_client::error::IconikClientError;
use models::SearchCriteria;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const SEARCH_PATH: &str = "/API/search/v1/search/";

/// **VALUE**: Verifies a tag search sends the credentials, paging and an `AND`
/// filter on the tag field, then decodes files and proxies of every hit.
///
/// **BUG THIS CATCHES**: Would catch missing `App-Id`/`Auth-Token` headers (Iconik
/// answers 401) or the tag landing in the free-text query instead of a filter.
#[tokio::test]
async fn given_tag_when_searching_then_sends_filter_and_decodes_results() {
    // GIVEN: A search endpoint expecting the tag filter
    let (server, client) = start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(header("app-id", APP_ID))
        .and(header("auth-token", AUTH_TOKEN))
        .and(query_param("per_page", "50"))
        .and(query_param("page", "1"))
        .and(body_partial_json(json!({
            "doc_types": ["assets"],
            "filter": {
                "operator": "AND",
                "terms": [{"name": "metadata._gcvi_tags", "value": "lecture"}]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [
                {
                    "id": "asset-1",
                    "title": "Week 1",
                    "files": [{"id": "f1", "name": "week1.mp4", "size": 1024}],
                    "proxies": [{"id": "proxy-1"}, {"id": "proxy-2"}]
                },
                {"id": "asset-2", "title": "Week 2"}
            ],
            "total": 2,
            "page": 1,
            "pages": 1,
            "per_page": 50
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Searching by tag
    let response = client.search_with_tag("lecture").await.unwrap();

    // THEN: Objects, files and proxies are decoded
    assert_eq!(response.objects.len(), 2);
    assert_eq!(response.file_names().collect::<Vec<_>>(), vec!["week1.mp4"]);
    assert_eq!(
        response.asset_proxy_pairs(),
        vec![
            ("asset-1".to_string(), "proxy-1".to_string()),
            ("asset-1".to_string(), "proxy-2".to_string()),
        ]
    );
    assert!(!response.has_more_pages());
}

#[tokio::test]
async fn given_inexact_title_when_searching_then_title_is_free_text_query() {
    let (server, client) = start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(json!({
            "query": "intro",
            "filter": {
                "operator": "AND",
                "terms": [{"name": "metadata._gcvi_tags", "value": "cs101"}]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .search_with_title_and_tag("intro", "cs101", false)
        .await
        .unwrap();

    assert!(response.objects.is_empty());
}

#[tokio::test]
async fn given_exact_title_when_searching_then_title_is_filter_term() {
    let (server, client) = start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(json!({
            "filter": {
                "operator": "AND",
                "terms": [{"name": "title", "value": "Intro"}]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "asset-9", "title": "Intro"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .search_with_title_and_tag("Intro", "", true)
        .await
        .unwrap();

    assert_eq!(response.objects[0].id, "asset-9");
}

#[tokio::test]
async fn given_matching_collections_when_looking_up_title_then_returns_ids_in_order() {
    // GIVEN: Two collections share the title
    let (server, client) = start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(json!({
            "doc_types": ["collections"],
            "filter": {"operator": "AND", "terms": [{"name": "title", "value": "Lectures"}]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [
                {"id": "col-1", "title": "Lectures"},
                {"id": "col-2", "title": "Lectures"}
            ]
        })))
        .mount(&server)
        .await;

    // WHEN: Resolving the title
    let collections = client.get_collection_ids("Lectures").await.unwrap();

    // THEN: Both ids come back in Iconik's order
    let ids: Vec<_> = collections.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["col-1", "col-2"]);
}

/// **VALUE**: Verifies an unknown collection title is reported as not found
/// instead of an empty list the caller would index into.
#[tokio::test]
async fn given_no_matching_collection_when_looking_up_title_then_returns_not_found() {
    let (server, client) = start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": []})))
        .mount(&server)
        .await;

    let result = client.get_collection_ids("Missing").await;

    assert!(matches!(result, Err(IconikClientError::NotFound { .. })));
}

#[tokio::test]
async fn given_blank_title_when_looking_up_collection_then_fails_without_request() {
    let (server, client) = start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.get_collection_ids("   ").await;

    assert!(matches!(result, Err(IconikClientError::Validation { .. })));
}

/// **VALUE**: Verifies every page of a multi-page search is collected.
///
/// **BUG THIS CATCHES**: Would catch a search that reports the full `total` but only
/// returns the first `per_page` hits, silently dropping the rest.
#[tokio::test]
async fn given_two_result_pages_when_searching_all_pages_then_merges_both() {
    // GIVEN: Page 1 of 2 and page 2 of 2
    let (server, client) = start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "asset-1"}],
            "total": 2,
            "page": 1,
            "pages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "asset-2"}],
            "total": 2,
            "page": 2,
            "pages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Collecting all pages
    let criteria = SearchCriteria::with_tag(client.tag_field(), "lecture");
    let response = client.search_all_pages(&criteria).await.unwrap();

    // THEN: Both pages are merged and paging is exhausted
    let ids: Vec<&str> = response.objects.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["asset-1", "asset-2"]);
    assert_eq!(response.total, Some(2));
    assert!(!response.has_more_pages());
}

#[tokio::test]
async fn given_page_that_does_not_advance_when_searching_all_pages_then_stops() {
    // GIVEN: A server that always reports page 1 of 3
    let (server, client) = start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "asset-1"}],
            "page": 1,
            "pages": 3
        })))
        .expect(2)
        .mount(&server)
        .await;

    // WHEN: Collecting all pages
    let criteria = SearchCriteria::with_tag(client.tag_field(), "lecture");
    let response = client.search_all_pages(&criteria).await.unwrap();

    // THEN: The loop ends after the repeated page instead of spinning
    assert_eq!(response.objects.len(), 2);
}
