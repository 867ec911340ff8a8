use crate::helpers::start;

use iconik_tools::cli::CommonArgs;
use iconik_tools::commands::upload::{UploadArgs, upload_file};
use iconik_tools::error::ToolError;

use std::path::PathBuf;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn args(file: PathBuf, title: &str) -> UploadArgs {
    UploadArgs {
        common: CommonArgs::default(),
        file,
        title: title.to_string(),
        collection: "Lectures".to_string(),
        storage_path: "/".to_string(),
        no_keyframes: true,
    }
}

#[tokio::test]
async fn given_unknown_collection_when_uploading_then_stops_before_creating_asset() {
    // GIVEN: No collection matches and asset creation must not happen
    let (server, client, config) = start().await;
    Mock::given(method("POST"))
        .and(path("/API/search/v1/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/assets/v1/assets/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "a1"})))
        .expect(0)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("week1.mp4");
    std::fs::write(&file, b"bytes").unwrap();

    // WHEN: Uploading
    let result = upload_file(&client, &config, &args(file, "Week 1")).await;

    // THEN: A not-found Iconik error is returned
    match result {
        Err(ToolError::Iconik { category, .. }) => assert_eq!(category, "not_found"),
        other => panic!("Expected Iconik not_found error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_missing_local_file_when_uploading_then_reports_upload_error() {
    let (server, client, config) = start().await;
    Mock::given(method("POST"))
        .and(path("/API/search/v1/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "col-1"}, {"id": "col-2"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/assets/v1/assets/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "a1"})))
        .expect(0)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let result = upload_file(&client, &config, &args(dir.path().join("nope.mp4"), "Week 1")).await;

    assert!(matches!(result, Err(ToolError::Upload { .. })));
}

#[tokio::test]
async fn given_blank_title_when_uploading_then_fails_before_any_request() {
    let (server, client, config) = start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = upload_file(&client, &config, &args(PathBuf::from("x.mp4"), "  ")).await;

    assert!(matches!(result, Err(ToolError::Tool { .. })));
}
