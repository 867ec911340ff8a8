use crate::client::{IconikClient, path_segment};
use crate::error::iconik_client::IconikClientError;

use models::{
    CreateFileRequest, CreateFileSetRequest, CreateFormatRequest, File, FileSet, FileStatusUpdate,
    Format, MultipartFinish, MultipartStart, Storage,
};

use log::debug;
use serde_json::json;

fn asset_endpoint(asset_id: &str, tail: &str) -> Result<String, IconikClientError> {
    Ok(format!("files/v1/assets/{}/{tail}", path_segment(asset_id)?))
}

fn file_endpoint(asset_id: &str, file_id: &str, tail: &str) -> Result<String, IconikClientError> {
    Ok(format!(
        "files/v1/assets/{}/files/{}/{tail}",
        path_segment(asset_id)?,
        path_segment(file_id)?
    ))
}

impl IconikClient {
    /// Default storage for a purpose (`FILES`, `PROXIES`, ...).
    pub async fn default_storage(&self, purpose: &str) -> Result<Storage, IconikClientError> {
        let url = self.endpoint(&format!(
            "files/v1/storages/matching/{}/",
            path_segment(purpose)?
        ))?;
        let storage: Storage = self.get_json(url).await?;
        debug!("Using {purpose} storage {} ({})", storage.id, storage.method);
        Ok(storage)
    }

    pub async fn create_format(
        &self,
        asset_id: &str,
        request: &CreateFormatRequest,
    ) -> Result<Format, IconikClientError> {
        let url = self.endpoint(&asset_endpoint(asset_id, "formats/")?)?;
        self.post_json(url, request).await
    }

    pub async fn create_file_set(
        &self,
        asset_id: &str,
        request: &CreateFileSetRequest,
    ) -> Result<FileSet, IconikClientError> {
        let url = self.endpoint(&asset_endpoint(asset_id, "file_sets/")?)?;
        self.post_json(url, request).await
    }

    /// Register a file; for B2 storages the response carries the upload target.
    pub async fn create_file(
        &self,
        asset_id: &str,
        request: &CreateFileRequest,
    ) -> Result<File, IconikClientError> {
        let url = self.endpoint(&asset_endpoint(asset_id, "files/")?)?;
        self.post_json(url, request).await
    }

    pub async fn update_file_status(
        &self,
        asset_id: &str,
        file_id: &str,
        update: &FileStatusUpdate,
    ) -> Result<File, IconikClientError> {
        let url = self.endpoint(&file_endpoint(asset_id, file_id, "")?)?;
        self.patch_json(url, update).await
    }

    /// Start a B2 large-file upload for an already registered file.
    pub async fn start_multipart_upload(
        &self,
        asset_id: &str,
        file_id: &str,
    ) -> Result<MultipartStart, IconikClientError> {
        let url = self.endpoint(&file_endpoint(asset_id, file_id, "multipart/b2/start/")?)?;
        self.post_json(url, &json!({})).await
    }

    /// Complete a B2 large-file upload with the part digests in part order.
    pub async fn finish_multipart_upload(
        &self,
        asset_id: &str,
        file_id: &str,
        part_sha1_array: &[String],
    ) -> Result<(), IconikClientError> {
        let url = self.endpoint(&file_endpoint(asset_id, file_id, "multipart/b2/finish/")?)?;
        let body = MultipartFinish {
            part_sha1_array: part_sha1_array.to_vec(),
        };
        self.post_no_content(url, &body).await
    }

    /// Ask Iconik to generate keyframes (and proxies) for a closed file.
    pub async fn request_keyframes(&self, asset_id: &str, file_id: &str) -> Result<(), IconikClientError> {
        let url = self.endpoint(&file_endpoint(asset_id, file_id, "keyframes/")?)?;
        self.post_no_content(url, &json!({})).await
    }
}
