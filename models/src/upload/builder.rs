use crate::ModelError;
use crate::upload::NewAssetUpload;

use common::{ErrorLocation, RedactedToken};

use std::panic::Location;

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Builder for validated [`NewAssetUpload`] records.
#[derive(Debug, Default)]
pub struct NewAssetUploadBuilder {
    asset_id: Option<String>,
    collection_id: Option<String>,
    storage_id: Option<String>,
    format_id: Option<String>,
    file_set_id: Option<String>,
    file_id: Option<String>,
    job_id: Option<String>,
    upload_url: Option<String>,
    upload_auth_token: Option<RedactedToken>,
    upload_filename: Option<String>,
    mime_type: Option<String>,
    size: Option<u64>,
    multipart_file_id: Option<String>,
}

impl NewAssetUploadBuilder {
    pub fn with_asset_id(mut self, id: impl Into<String>) -> Self {
        self.asset_id = Some(id.into());
        self
    }

    pub fn with_collection_id(mut self, id: impl Into<String>) -> Self {
        self.collection_id = Some(id.into());
        self
    }

    pub fn with_storage_id(mut self, id: impl Into<String>) -> Self {
        self.storage_id = Some(id.into());
        self
    }

    pub fn with_format_id(mut self, id: impl Into<String>) -> Self {
        self.format_id = Some(id.into());
        self
    }

    pub fn with_file_set_id(mut self, id: impl Into<String>) -> Self {
        self.file_set_id = Some(id.into());
        self
    }

    pub fn with_file_id(mut self, id: impl Into<String>) -> Self {
        self.file_id = Some(id.into());
        self
    }

    pub fn with_job_id(mut self, id: impl Into<String>) -> Self {
        self.job_id = Some(id.into());
        self
    }

    pub fn with_upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = Some(url.into());
        self
    }

    pub fn with_upload_auth_token(mut self, token: impl Into<RedactedToken>) -> Self {
        self.upload_auth_token = Some(token.into());
        self
    }

    pub fn with_upload_filename(mut self, name: impl Into<String>) -> Self {
        self.upload_filename = Some(name.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_multipart_file_id(mut self, id: impl Into<String>) -> Self {
        self.multipart_file_id = Some(id.into());
        self
    }

    /// Build the upload record with validation.
    #[track_caller]
    pub fn build(self) -> Result<NewAssetUpload, ModelError> {
        let asset_id = required_id(self.asset_id, "Asset ID")?;
        let collection_id = required_id(self.collection_id, "Collection ID")?;
        let storage_id = required_id(self.storage_id, "Storage ID")?;
        let format_id = required_id(self.format_id, "Format ID")?;
        let file_set_id = required_id(self.file_set_id, "File set ID")?;
        let file_id = required_id(self.file_id, "File ID")?;
        let job_id = required_id(self.job_id, "Job ID")?;

        let upload_url = required_id(self.upload_url, "Upload URL")?;
        if !upload_url.starts_with("http://") && !upload_url.starts_with("https://") {
            return Err(ModelError::Validation {
                message: format!("Invalid upload URL format: {upload_url}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let upload_auth_token = self.upload_auth_token.ok_or_else(|| ModelError::Validation {
            message: String::from("Upload auth token is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if upload_auth_token.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Upload auth token cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let upload_filename = required_id(self.upload_filename, "Upload filename")?;

        let size = self.size.ok_or_else(|| ModelError::Validation {
            message: String::from("Size is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mime_type = self
            .mime_type
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

        let multipart_file_id = self.multipart_file_id.filter(|id| !id.is_empty());

        Ok(NewAssetUpload {
            asset_id,
            collection_id,
            storage_id,
            format_id,
            file_set_id,
            file_id,
            job_id,
            upload_url,
            upload_auth_token,
            upload_filename,
            mime_type,
            size,
            multipart_file_id,
            sha1_list: Vec::new(),
        })
    }
}

#[track_caller]
fn required_id(value: Option<String>, field: &str) -> Result<String, ModelError> {
    let value = value.ok_or_else(|| ModelError::Validation {
        message: format!("{field} is required"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if value.is_empty() {
        return Err(ModelError::Validation {
            message: format!("{field} cannot be empty"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(value)
}
