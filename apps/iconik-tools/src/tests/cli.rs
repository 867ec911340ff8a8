use crate::commands::search::SearchArgs;
use crate::commands::signed_url::SignedUrlArgs;
use crate::commands::upload::UploadArgs;

use clap::Parser;
use log::LevelFilter;

#[test]
fn given_upload_flags_when_parsed_then_storage_path_defaults_to_root() {
    let args = UploadArgs::try_parse_from([
        "iconik-upload",
        "--app-id",
        "app",
        "--token",
        "secret",
        "--file",
        "/tmp/week1.mp4",
        "--title",
        "Week 1",
        "--collection",
        "Lectures",
    ])
    .unwrap();

    assert_eq!(args.storage_path, "/");
    assert_eq!(args.common.app_id.as_deref(), Some("app"));
    assert!(!args.no_keyframes);
}

#[test]
fn given_missing_title_when_parsing_upload_then_fails() {
    let result = UploadArgs::try_parse_from([
        "iconik-upload",
        "--file",
        "/tmp/week1.mp4",
        "--collection",
        "Lectures",
    ]);

    assert!(result.is_err());
}

#[test]
fn given_debug_flag_when_parsed_then_log_level_is_debug() {
    let args = SearchArgs::try_parse_from(["iconik-search", "--tag", "cs101", "--debug"]).unwrap();

    assert_eq!(args.common.log_level(), LevelFilter::Debug);
    assert_eq!(args.title, "");
    assert_eq!(args.tag, "cs101");
}

#[test]
fn given_asset_id_when_parsing_signed_url_then_fetch_is_on_by_default() {
    let args =
        SignedUrlArgs::try_parse_from(["iconik-signed-url", "--asset-id", "asset-1"]).unwrap();

    assert_eq!(args.asset_id, "asset-1");
    assert!(!args.no_fetch);
    assert_eq!(args.common.log_level(), LevelFilter::Info);
}

/// **VALUE**: Verifies `--host` wins over the config file's host.
#[test]
fn given_config_dir_and_host_flag_when_loading_config_then_flag_overrides_file() {
    // GIVEN: A config file pointing at one host
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"host": "https://file.example/API/", "search_per_page": 5}"#,
    )
    .unwrap();
    let args = SearchArgs::try_parse_from([
        "iconik-search",
        "--config-dir",
        dir.path().to_str().unwrap(),
        "--host",
        "https://flag.example/API/",
    ])
    .unwrap();

    // WHEN: Loading
    let config = args.common.load_config().unwrap();

    // THEN: File values are kept, host comes from the flag
    assert_eq!(config.search_per_page, 5);
    assert_eq!(config.host, "https://flag.example/API/");
}
