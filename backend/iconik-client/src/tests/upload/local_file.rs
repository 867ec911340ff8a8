use crate::error::UploadError;
use crate::upload::LocalFile;
use crate::upload::local_file::guess_mime_type;

use std::path::Path;

#[tokio::test]
async fn given_existing_file_when_inspected_then_reports_size_name_and_mime() {
    // GIVEN: A small mp4-named file
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.mp4");
    std::fs::write(&path, vec![0u8; 1234]).unwrap();

    // WHEN: Inspecting it
    let local = LocalFile::inspect(&path).await.unwrap();

    // THEN: Size, name and mime type are filled in
    assert_eq!(local.size, 1234);
    assert_eq!(local.file_name, "clip.mp4");
    assert_eq!(local.mime_type, "video/mp4");
    assert!(local.modified_rfc3339().ends_with('Z'));
}

#[tokio::test]
async fn given_missing_file_when_inspected_then_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = LocalFile::inspect(dir.path().join("missing.mov")).await;

    match result {
        Err(UploadError::Io { path, .. }) => assert!(path.ends_with("missing.mov")),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_directory_when_inspected_then_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = LocalFile::inspect(dir.path()).await;

    assert!(matches!(result, Err(UploadError::Io { .. })));
}

#[test]
fn given_unknown_extension_when_guessing_mime_then_falls_back_to_octet_stream() {
    assert_eq!(
        guess_mime_type(Path::new("footage.unknownext")),
        "application/octet-stream"
    );
    assert_eq!(guess_mime_type(Path::new("still.png")), "image/png");
}

#[test]
fn given_storage_path_with_slashes_when_normalised_then_edges_are_trimmed() {
    use crate::upload::workflow::normalize_storage_path;

    assert_eq!(normalize_storage_path("/lectures/2024/"), "lectures/2024");
    assert_eq!(normalize_storage_path("/"), "");
    assert_eq!(normalize_storage_path(" media "), "media");
}
