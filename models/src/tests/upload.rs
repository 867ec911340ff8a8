use crate::{ModelError, NewAssetUploadBuilder};

fn complete_builder() -> NewAssetUploadBuilder {
    NewAssetUploadBuilder::default()
        .with_asset_id("asset")
        .with_collection_id("collection")
        .with_storage_id("storage")
        .with_format_id("format")
        .with_file_set_id("fileset")
        .with_file_id("file")
        .with_job_id("job")
        .with_upload_url("https://b2.example/upload")
        .with_upload_auth_token("b2-token")
        .with_upload_filename("dir/one.mp4")
        .with_mime_type("video/mp4")
        .with_size(1024)
}

fn validation_message(builder: NewAssetUploadBuilder) -> String {
    match builder.build().unwrap_err() {
        ModelError::Validation { message, .. } => message,
    }
}

#[test]
fn given_all_fields_when_building_then_returns_single_part_upload() {
    let upload = complete_builder().build().unwrap();

    assert_eq!(upload.asset_id, "asset");
    assert_eq!(upload.upload_auth_token.expose(), "b2-token");
    assert!(!upload.is_multipart());
    assert!(upload.sha1_list.is_empty());
}

/// **VALUE**: Verifies that a missing allocation step is caught before any bytes move.
///
/// **BUG THIS CATCHES**: Would catch the workflow handing a half-built record to the
/// uploader, which would later PATCH a job or file that was never created.
#[test]
fn given_missing_job_id_when_building_then_returns_validation_error() {
    let builder = NewAssetUploadBuilder::default()
        .with_asset_id("asset")
        .with_collection_id("collection")
        .with_storage_id("storage")
        .with_format_id("format")
        .with_file_set_id("fileset")
        .with_file_id("file")
        .with_upload_url("https://b2.example/upload")
        .with_upload_auth_token("b2-token")
        .with_upload_filename("one.mp4")
        .with_size(1);

    assert_eq!(validation_message(builder), "Job ID is required");
}

#[test]
fn given_empty_asset_id_when_building_then_returns_validation_error() {
    let builder = complete_builder().with_asset_id("");

    assert_eq!(validation_message(builder), "Asset ID cannot be empty");
}

#[test]
fn given_non_http_upload_url_when_building_then_returns_validation_error() {
    let builder = complete_builder().with_upload_url("ftp://b2.example/upload");

    assert!(validation_message(builder).starts_with("Invalid upload URL format"));
}

#[test]
fn given_empty_token_when_building_then_returns_validation_error() {
    let builder = complete_builder().with_upload_auth_token("");

    assert_eq!(validation_message(builder), "Upload auth token cannot be empty");
}

#[test]
fn given_multipart_file_id_when_building_then_upload_is_multipart() {
    let upload = complete_builder()
        .with_multipart_file_id("b2-file-id")
        .build()
        .unwrap();

    assert!(upload.is_multipart());
    assert_eq!(upload.multipart_file_id.as_deref(), Some("b2-file-id"));
}

#[test]
fn given_no_mime_type_when_building_then_defaults_to_octet_stream() {
    let upload = complete_builder().with_mime_type("").build().unwrap();

    assert_eq!(upload.mime_type, "application/octet-stream");
}
