use crate::{ObjectList, UrlObject};

use serde_json::json;

#[test]
fn given_listing_when_first_url_requested_then_skips_entries_without_url() {
    let listing: ObjectList<UrlObject> = serde_json::from_value(json!({
        "objects": [{"id": "x"}, {"id": "y", "url": "https://test.com/url"}]
    }))
    .unwrap();

    assert_eq!(listing.first_url(), Some("https://test.com/url"));
}

/// **VALUE**: Verifies keyframe lookup only considers `KEYFRAME` entries.
///
/// **BUG THIS CATCHES**: Would catch returning a poster or custom keyframe URL
/// when the asset's first listed entry is not a plain keyframe.
#[test]
fn given_mixed_keyframe_types_when_first_keyframe_requested_then_returns_keyframe_entry() {
    let listing: ObjectList<UrlObject> = serde_json::from_value(json!({
        "objects": [
            {"url": "https://test.com/poster", "type": "POSTER"},
            {"url": "https://test.com/keyframe", "type": "KEYFRAME"}
        ]
    }))
    .unwrap();

    assert_eq!(listing.first_keyframe_url(), Some("https://test.com/keyframe"));
}

#[test]
fn given_missing_objects_field_when_decoded_then_listing_is_empty() {
    let listing: ObjectList<UrlObject> = serde_json::from_value(json!({})).unwrap();

    assert!(listing.objects.is_empty());
    assert_eq!(listing.first_url(), None);
}
