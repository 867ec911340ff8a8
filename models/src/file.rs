//! Formats, filesets and files: how raw storage objects map onto an asset.

use serde::{Deserialize, Serialize};

pub const ORIGINAL_FORMAT_NAME: &str = "ORIGINAL";
pub const FILE_TYPE: &str = "FILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatMetadata {
    pub internet_media_type: String,
}

/// Body of `POST files/v1/assets/{asset}/formats/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFormatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub name: String,
    pub metadata: Vec<FormatMetadata>,
    pub storage_methods: Vec<String>,
}

impl CreateFormatRequest {
    pub fn original(mime_type: impl Into<String>, storage_method: impl Into<String>) -> Self {
        Self {
            user_id: None,
            name: ORIGINAL_FORMAT_NAME.to_string(),
            metadata: vec![FormatMetadata {
                internet_media_type: mime_type.into(),
            }],
            storage_methods: vec![storage_method.into()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of `POST files/v1/assets/{asset}/file_sets/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFileSetRequest {
    pub format_id: String,
    pub storage_id: String,
    pub base_dir: String,
    pub name: String,
    #[serde(default)]
    pub component_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSet {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of `POST files/v1/assets/{asset}/files/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFileRequest {
    pub original_name: String,
    pub directory_path: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: String,
    pub storage_id: String,
    pub file_set_id: String,
    pub format_id: String,
    pub file_date_created: String,
    pub file_date_modified: String,
}

/// Upload credentials handed out by Iconik for B2 storages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FileStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_credentials: Option<UploadCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multipart_upload_url: Option<String>,
}

impl File {
    /// Upload target, preferring the top-level URL over the one inside the credentials.
    pub fn resolved_upload_url(&self) -> Option<&str> {
        self.upload_url.as_deref().or_else(|| {
            self.upload_credentials
                .as_ref()
                .and_then(|c| c.upload_url.as_deref())
        })
    }

    pub fn authorization_token(&self) -> Option<&str> {
        self.upload_credentials
            .as_ref()
            .and_then(|c| c.authorization_token.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileStatus {
    Open,
    Closed,
    Deleted,
    Archived,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Body of `PATCH files/v1/assets/{asset}/files/{file}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatusUpdate {
    pub status: FileStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_processed: Option<u8>,
}

impl FileStatusUpdate {
    pub fn closed() -> Self {
        Self {
            status: FileStatus::Closed,
            progress_processed: Some(100),
        }
    }
}

/// Response of the B2 multipart start endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipartStart {
    pub upload_url: String,
    pub authorization_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
}

/// Body of the B2 multipart finish endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipartFinish {
    pub part_sha1_array: Vec<String>,
}
