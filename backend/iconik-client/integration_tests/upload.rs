use crate::helpers::{config_for, start};

use iconik_client::error::UploadError;
use iconik_client::upload::b2::sha1_hex;
use iconik_client::upload::{B2Transfer, LocalFile, NewAssetSpec, UploadOptions, upload_new_asset};

use std::path::Path;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ASSET_ID: &str = "asset-1";
const FILE_ID: &str = "file-1";
const JOB_ID: &str = "job-1";

async fn mount_json(server: &MockServer, verb: &str, route: &str, body: serde_json::Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts every Iconik call `make_new_asset` makes up to the file record.
async fn mount_allocation(server: &MockServer, file_body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/API/assets/v1/assets/"))
        .and(body_partial_json(json!({"title": "Week 1", "type": "ASSET"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": ASSET_ID})))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/assets/v1/collections/col-1/contents/"))
        .and(body_partial_json(json!({"object_id": ASSET_ID, "object_type": "assets"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(server)
        .await;
    mount_json(
        server,
        "GET",
        "/API/files/v1/storages/matching/FILES/",
        json!({"id": "storage-1", "method": "B2", "purpose": "FILES"}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/API/files/v1/assets/asset-1/formats/"))
        .and(body_partial_json(json!({
            "name": "ORIGINAL",
            "metadata": [{"internet_media_type": "video/mp4"}],
            "storage_methods": ["B2"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "format-1"})))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/files/v1/assets/asset-1/file_sets/"))
        .and(body_partial_json(json!({
            "format_id": "format-1",
            "storage_id": "storage-1",
            "base_dir": "lectures/2024",
            "name": "week1.mp4"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "fileset-1"})))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/files/v1/assets/asset-1/files/"))
        .and(body_partial_json(json!({
            "original_name": "week1.mp4",
            "directory_path": "lectures/2024",
            "type": "FILE",
            "storage_id": "storage-1",
            "file_set_id": "fileset-1",
            "format_id": "format-1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(file_body))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/jobs/v1/jobs/"))
        .and(body_partial_json(json!({
            "object_type": "assets",
            "object_id": ASSET_ID,
            "type": "TRANSFER",
            "status": "STARTED"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": JOB_ID})))
        .expect(1)
        .mount(server)
        .await;
}

async fn spec_for(dir: &Path, contents: &[u8]) -> NewAssetSpec {
    let file_path = dir.join("week1.mp4");
    std::fs::write(&file_path, contents).unwrap();
    NewAssetSpec {
        collection_id: "col-1".to_string(),
        title: "Week 1".to_string(),
        storage_path: "/lectures/2024/".to_string(),
        local: LocalFile::inspect(&file_path).await.unwrap(),
    }
}

fn single_part_file(server: &MockServer) -> serde_json::Value {
    json!({
        "id": FILE_ID,
        "status": "OPEN",
        "upload_url": format!("{}/b2/upload", server.uri()),
        "upload_credentials": {"authorizationToken": "b2-token", "bucketId": "bucket"},
        "upload_filename": "lectures/2024/week 1.mp4"
    })
}

/// **VALUE**: Drives the whole single-request upload: allocation, the B2 POST,
/// then closing the file, finishing the job and requesting keyframes.
///
/// **BUG THIS CATCHES**: Would catch any step being skipped or reordered, the B2
/// request missing its token or checksum, or the file left OPEN after upload.
#[tokio::test]
async fn given_small_file_when_uploading_then_runs_full_single_part_workflow() {
    // GIVEN: A small local file and every Iconik + B2 endpoint mocked
    let (server, client) = start().await;
    let dir = tempfile::tempdir().unwrap();
    let contents = b"small lecture recording";
    let spec = spec_for(dir.path(), contents).await;

    mount_allocation(&server, single_part_file(&server)).await;
    Mock::given(method("POST"))
        .and(path("/b2/upload"))
        .and(header("authorization", "b2-token"))
        .and(header("x-bz-file-name", "lectures/2024/week%201.mp4"))
        .and(header("x-bz-content-sha1", sha1_hex(contents).as_str()))
        .and(header("content-type", "video/mp4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fileId": "b2-file"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/API/files/v1/assets/asset-1/files/file-1/"))
        .and(body_partial_json(json!({"status": "CLOSED", "progress_processed": 100})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": FILE_ID, "status": "CLOSED"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/API/jobs/v1/jobs/job-1/"))
        .and(body_partial_json(json!({"status": "FINISHED", "progress_processed": 100})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": JOB_ID, "status": "FINISHED"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/files/v1/assets/asset-1/files/file-1/keyframes/"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let transfer = B2Transfer::new(5 * 1024 * 1024, Duration::from_secs(30)).unwrap();
    let options = UploadOptions::from(&config_for(&server));

    // WHEN: Uploading
    let upload = upload_new_asset(&client, &transfer, &spec, options)
        .await
        .unwrap();

    // THEN: The record describes a single-part upload of the file
    assert_eq!(upload.asset_id, ASSET_ID);
    assert_eq!(upload.job_id, JOB_ID);
    assert_eq!(upload.size, contents.len() as u64);
    assert_eq!(upload.mime_type, "video/mp4");
    assert!(!upload.is_multipart());
    assert!(upload.sha1_list.is_empty());
}

#[tokio::test]
async fn given_file_without_upload_credentials_when_allocating_then_reports_missing_field() {
    let (server, client) = start().await;
    let dir = tempfile::tempdir().unwrap();
    let spec = spec_for(dir.path(), b"bytes").await;

    Mock::given(method("POST"))
        .and(path("/API/assets/v1/assets/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": ASSET_ID})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/assets/v1/collections/col-1/contents/"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/API/files/v1/storages/matching/FILES/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "storage-1", "method": "S3"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/files/v1/assets/asset-1/formats/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "format-1"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/files/v1/assets/asset-1/file_sets/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "fileset-1"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/files/v1/assets/asset-1/files/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": FILE_ID})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/jobs/v1/jobs/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": JOB_ID})))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.make_new_asset(&spec, 1024).await;

    assert!(matches!(result, Err(UploadError::MissingField { .. })));
}

/// **VALUE**: Verifies a file above the threshold is split into B2 parts and the
/// reported part digests are handed back to Iconik in part order.
///
/// **BUG THIS CATCHES**: Would catch parts sent out of order, a wrong part count,
/// or the finish call forgetting the digest list B2 needs to assemble the file.
#[tokio::test]
async fn given_file_over_threshold_when_uploading_then_sends_parts_and_finishes_multipart() {
    // GIVEN: 12 MiB, a 10 byte threshold and the smallest part size B2 accepts
    const PART: usize = 5 * 1024 * 1024;
    let (server, client) = start().await;
    let dir = tempfile::tempdir().unwrap();
    let contents: Vec<u8> = (0..12 * 1024 * 1024).map(|i| (i % 251) as u8).collect();
    let spec = spec_for(dir.path(), &contents).await;

    mount_allocation(&server, json!({"id": FILE_ID, "status": "OPEN"})).await;
    Mock::given(method("POST"))
        .and(path("/API/files/v1/assets/asset-1/files/file-1/multipart/b2/start/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "upload_url": format!("{}/b2/part", server.uri()),
            "authorization_token": "part-token",
            "file_id": "b2-large-file"
        })))
        .expect(1)
        .mount(&server)
        .await;

    for (number, range) in [(1, 0..PART), (2, PART..2 * PART), (3, 2 * PART..contents.len())] {
        let chunk = &contents[range];
        Mock::given(method("POST"))
            .and(path("/b2/part"))
            .and(header("authorization", "part-token"))
            .and(header("x-bz-part-number", number.to_string().as_str()))
            .and(header("x-bz-content-sha1", sha1_hex(chunk).as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"partNumber": number, "contentSha1": format!("sha-{number}")})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    Mock::given(method("POST"))
        .and(path("/API/files/v1/assets/asset-1/files/file-1/multipart/b2/finish/"))
        .and(body_partial_json(json!({"part_sha1_array": ["sha-1", "sha-2", "sha-3"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "PATCH",
        "/API/files/v1/assets/asset-1/files/file-1/",
        json!({"id": FILE_ID, "status": "CLOSED"}),
    )
    .await;
    mount_json(
        &server,
        "PATCH",
        "/API/jobs/v1/jobs/job-1/",
        json!({"id": JOB_ID, "status": "FINISHED"}),
    )
    .await;

    let transfer = B2Transfer::new(PART as u64, Duration::from_secs(30)).unwrap();
    let options = UploadOptions {
        multipart_threshold_bytes: 10,
        request_keyframes: false,
    };

    // WHEN: Uploading
    let upload = upload_new_asset(&client, &transfer, &spec, options)
        .await
        .unwrap();

    // THEN: The multipart id and digests are recorded
    assert!(upload.is_multipart());
    assert_eq!(upload.multipart_file_id.as_deref(), Some("b2-large-file"));
    assert_eq!(upload.upload_url, format!("{}/b2/part", server.uri()));
    assert_eq!(upload.sha1_list, vec!["sha-1", "sha-2", "sha-3"]);
}

/// **VALUE**: Verifies a rejected transfer marks the job FAILED and leaves the
/// file untouched.
///
/// **BUG THIS CATCHES**: Would catch a failed upload being reported as CLOSED,
/// which makes Iconik show an asset with no bytes behind it.
#[tokio::test]
async fn given_storage_rejects_bytes_when_uploading_then_job_is_marked_failed() {
    // GIVEN: B2 answers 503
    let (server, client) = start().await;
    let dir = tempfile::tempdir().unwrap();
    let spec = spec_for(dir.path(), b"doomed").await;

    mount_allocation(&server, single_part_file(&server)).await;
    Mock::given(method("POST"))
        .and(path("/b2/upload"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/API/jobs/v1/jobs/job-1/"))
        .and(body_partial_json(json!({"status": "FAILED"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": JOB_ID, "status": "FAILED"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/API/files/v1/assets/asset-1/files/file-1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": FILE_ID})))
        .expect(0)
        .mount(&server)
        .await;

    let transfer = B2Transfer::new(5 * 1024 * 1024, Duration::from_secs(30)).unwrap();
    let options = UploadOptions {
        multipart_threshold_bytes: 1024,
        request_keyframes: true,
    };

    // WHEN: Uploading
    let result = upload_new_asset(&client, &transfer, &spec, options).await;

    // THEN: The transfer error surfaces with B2's status
    match result {
        Err(err @ UploadError::Transfer { .. }) => assert_eq!(err.status_code(), Some(503)),
        Err(other) => panic!("Expected Transfer error, got {other}"),
        Ok(upload) => panic!("Expected Transfer error, got {upload:?}"),
    }
}

#[tokio::test]
async fn given_allocated_upload_when_failing_then_patches_job_to_failed() {
    let (server, client) = start().await;
    let dir = tempfile::tempdir().unwrap();
    let spec = spec_for(dir.path(), b"abc").await;
    mount_allocation(&server, single_part_file(&server)).await;
    Mock::given(method("PATCH"))
        .and(path("/API/jobs/v1/jobs/job-1/"))
        .and(body_partial_json(json!({"status": "FAILED"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": JOB_ID})))
        .expect(1)
        .mount(&server)
        .await;

    let upload = client.make_new_asset(&spec, 1024).await.unwrap();
    client.fail_upload(&upload).await.unwrap();

    assert_eq!(upload.upload_filename, "lectures/2024/week 1.mp4");
    assert_eq!(upload.upload_auth_token.expose(), "b2-token");
}

