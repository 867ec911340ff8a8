use crate::search::{ASSETS_DOC_TYPE, COLLECTIONS_DOC_TYPE, FILTER_OPERATOR_AND};
use crate::{FilterTerm, SearchCriteria, SearchResponse};

use serde_json::json;

const TAG_FIELD: &str = "metadata._gcvi_tags";

/// **VALUE**: Verifies the exact JSON shape of a tag search body.
///
/// **BUG THIS CATCHES**: Would catch renamed fields (`doc_types`, `operator`, `terms`)
/// that Iconik would silently ignore, turning a filtered search into "return everything".
#[test]
fn given_tag_when_building_criteria_then_serializes_and_filter() {
    // GIVEN/WHEN: Criteria for a single tag
    let criteria = SearchCriteria::with_tag(TAG_FIELD, "TeachingVideos");

    // THEN: Matches the documented payload
    let value = serde_json::to_value(&criteria).unwrap();
    assert_eq!(
        value,
        json!({
            "doc_types": ["assets"],
            "filter": {
                "operator": "AND",
                "terms": [{"name": TAG_FIELD, "value": "TeachingVideos"}]
            }
        })
    );
}

#[test]
fn given_title_not_exact_when_building_criteria_then_title_is_free_text_query() {
    let criteria = SearchCriteria::with_title_and_tag(TAG_FIELD, Some("lecture"), Some("math"), false);

    assert_eq!(criteria.query.as_deref(), Some("lecture"));
    let filter = criteria.filter.unwrap();
    assert_eq!(filter.operator, FILTER_OPERATOR_AND);
    assert_eq!(filter.terms, vec![FilterTerm::new(TAG_FIELD, "math")]);
}

#[test]
fn given_exact_title_when_building_criteria_then_title_becomes_filter_term() {
    let criteria = SearchCriteria::with_title_and_tag(TAG_FIELD, Some("lecture"), Some("math"), true);

    assert!(criteria.query.is_none());
    let terms = criteria.filter.unwrap().terms;
    assert_eq!(terms[0], FilterTerm::new("title", "lecture"));
    assert_eq!(terms[1], FilterTerm::new(TAG_FIELD, "math"));
}

/// **VALUE**: Verifies blank CLI flags do not produce empty filter terms.
#[test]
fn given_blank_title_and_tag_when_building_criteria_then_no_filter_is_sent() {
    let criteria = SearchCriteria::with_title_and_tag(TAG_FIELD, Some("  "), Some(""), true);

    assert_eq!(criteria.doc_types, vec![ASSETS_DOC_TYPE]);
    assert!(criteria.query.is_none());
    assert!(criteria.filter.is_none());

    let value = serde_json::to_value(&criteria).unwrap();
    assert!(value.get("filter").is_none());
}

#[test]
fn given_collection_title_when_building_criteria_then_searches_collections() {
    let criteria = SearchCriteria::for_collection_title("Lectures 2024");

    assert_eq!(criteria.doc_types, vec![COLLECTIONS_DOC_TYPE]);
    assert_eq!(
        criteria.filter.unwrap().terms,
        vec![FilterTerm::new("title", "Lectures 2024")]
    );
}

/// **VALUE**: Verifies decoding of a search page and the asset/proxy pairing used
/// by the search tool to request signed proxy URLs.
#[test]
fn given_search_payload_when_decoded_then_pairs_assets_with_proxies() {
    // GIVEN: A page with two assets, one without proxies
    let payload = json!({
        "objects": [
            {"id": "a1", "title": "One", "files": [{"name": "one.mp4"}], "proxies": [{"id": "p1"}, {"id": "p2"}]},
            {"id": "a2", "files": [{"name": "two.mov", "size": 42}], "unknown_field": true}
        ],
        "total": 2, "page": 1, "pages": 1, "per_page": 50
    });

    // WHEN: Decoding
    let response: SearchResponse = serde_json::from_value(payload).unwrap();

    // THEN: Objects, names and pairs are exposed
    assert_eq!(response.objects.len(), 2);
    assert_eq!(response.file_names().collect::<Vec<_>>(), vec!["one.mp4", "two.mov"]);
    assert_eq!(
        response.asset_proxy_pairs(),
        vec![
            ("a1".to_string(), "p1".to_string()),
            ("a1".to_string(), "p2".to_string())
        ]
    );
    assert!(!response.has_more_pages());
}

#[test]
fn given_page_before_last_when_checked_then_has_more_pages() {
    let response: SearchResponse =
        serde_json::from_value(json!({"objects": [], "page": 1, "pages": 3})).unwrap();

    assert!(response.has_more_pages());
}

/// **VALUE**: Verifies the next page number comes from the paging fields.
///
/// **BUG THIS CATCHES**: Would catch a search that stops after the first page, or one
/// that keeps requesting past the last page when `pages` is reached or missing.
#[test]
fn given_paging_fields_when_next_page_requested_then_follows_until_last() {
    // GIVEN: Responses at different positions
    let first: SearchResponse =
        serde_json::from_value(json!({"objects": [], "page": 1, "pages": 2})).unwrap();
    let last: SearchResponse =
        serde_json::from_value(json!({"objects": [], "page": 2, "pages": 2})).unwrap();
    let unpaged: SearchResponse = serde_json::from_value(json!({"objects": []})).unwrap();

    // WHEN/THEN: Only the first one has a successor
    assert_eq!(first.next_page(), Some(2));
    assert_eq!(last.next_page(), None);
    assert_eq!(unpaged.next_page(), None);
}
