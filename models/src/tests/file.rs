use crate::{CreateFormatRequest, File, FileStatus, FileStatusUpdate};

use serde_json::json;

/// **VALUE**: Verifies that B2 credentials in camelCase are decoded from a file-create response.
#[test]
fn given_b2_file_response_when_decoded_then_exposes_upload_target_and_token() {
    // GIVEN: A file-create response for a B2 storage
    let file: File = serde_json::from_value(json!({
        "id": "f1",
        "status": "OPEN",
        "upload_url": "https://pod-000.backblaze.com/b2api/v2/b2_upload_file/abc",
        "upload_filename": "lectures/one.mp4",
        "upload_credentials": {"authorizationToken": "b2-token", "bucketId": "bucket"}
    }))
    .unwrap();

    // THEN: Everything the uploader needs is available
    assert_eq!(file.status, Some(FileStatus::Open));
    assert_eq!(
        file.resolved_upload_url(),
        Some("https://pod-000.backblaze.com/b2api/v2/b2_upload_file/abc")
    );
    assert_eq!(file.authorization_token(), Some("b2-token"));
}

#[test]
fn given_upload_url_only_in_credentials_when_resolved_then_falls_back_to_credentials() {
    let file: File = serde_json::from_value(json!({
        "id": "f1",
        "upload_credentials": {"uploadUrl": "https://b2.example/upload", "authorizationToken": "t"}
    }))
    .unwrap();

    assert_eq!(file.resolved_upload_url(), Some("https://b2.example/upload"));
}

#[test]
fn given_unrecognised_status_when_decoded_then_maps_to_unknown() {
    let file: File = serde_json::from_value(json!({"id": "f1", "status": "MISSING"})).unwrap();

    assert_eq!(file.status, Some(FileStatus::Unknown));
}

#[test]
fn given_original_format_when_serialized_then_carries_mime_type_and_storage_method() {
    let request = CreateFormatRequest::original("video/mp4", "B2");

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "name": "ORIGINAL",
            "metadata": [{"internet_media_type": "video/mp4"}],
            "storage_methods": ["B2"]
        })
    );
}

#[test]
fn given_closed_update_when_serialized_then_reports_full_progress() {
    assert_eq!(
        serde_json::to_value(FileStatusUpdate::closed()).unwrap(),
        json!({"status": "CLOSED", "progress_processed": 100})
    );
}
