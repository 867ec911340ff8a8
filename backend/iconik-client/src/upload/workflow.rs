use crate::client::IconikClient;
use crate::error::upload::UploadError;
use crate::upload::NewAssetSpec;

use models::storage::FILES_STORAGE_PURPOSE;
use models::file::FILE_TYPE;
use models::{
    CreateAssetRequest, CreateFileRequest, CreateFileSetRequest, CreateFormatRequest,
    CreateJobRequest, FileStatusUpdate, JobUpdate, NewAssetUpload, NewAssetUploadBuilder,
};

use log::{debug, info};

/// `/lectures/2024/` -> `lectures/2024`, `/` -> ``.
pub(crate) fn normalize_storage_path(path: &str) -> String {
    path.trim().trim_matches('/').to_string()
}

impl IconikClient {
    /// Allocate everything Iconik needs before bytes can be uploaded.
    ///
    /// Files larger than `multipart_threshold` get a B2 multipart upload
    /// started, and the returned record points at the multipart target.
    pub async fn make_new_asset(
        &self,
        spec: &NewAssetSpec,
        multipart_threshold: u64,
    ) -> Result<NewAssetUpload, UploadError> {
        let local = &spec.local;
        let directory = normalize_storage_path(&spec.storage_path);

        let asset = self
            .create_asset(&CreateAssetRequest::new(spec.title.as_str()))
            .await?;
        self.add_to_collection(&spec.collection_id, &asset.id).await?;

        let storage = self.default_storage(FILES_STORAGE_PURPOSE).await?;

        let format = self
            .create_format(
                &asset.id,
                &CreateFormatRequest::original(local.mime_type.as_str(), storage.method.as_str()),
            )
            .await?;

        let file_set = self
            .create_file_set(
                &asset.id,
                &CreateFileSetRequest {
                    format_id: format.id.clone(),
                    storage_id: storage.id.clone(),
                    base_dir: directory.clone(),
                    name: local.file_name.clone(),
                    component_ids: Vec::new(),
                },
            )
            .await?;

        let file = self
            .create_file(
                &asset.id,
                &CreateFileRequest {
                    original_name: local.file_name.clone(),
                    directory_path: directory,
                    size: local.size,
                    file_type: FILE_TYPE.to_string(),
                    storage_id: storage.id.clone(),
                    file_set_id: file_set.id.clone(),
                    format_id: format.id.clone(),
                    file_date_created: local.created_rfc3339(),
                    file_date_modified: local.modified_rfc3339(),
                },
            )
            .await?;

        let upload_filename = file
            .upload_filename
            .clone()
            .unwrap_or_else(|| local.file_name.clone());

        let mut builder = NewAssetUploadBuilder::default()
            .with_asset_id(asset.id.as_str())
            .with_collection_id(spec.collection_id.as_str())
            .with_storage_id(storage.id.as_str())
            .with_format_id(format.id.as_str())
            .with_file_set_id(file_set.id.as_str())
            .with_file_id(file.id.as_str())
            .with_upload_filename(upload_filename)
            .with_mime_type(local.mime_type.as_str())
            .with_size(local.size);

        if local.size > multipart_threshold {
            let multipart = self.start_multipart_upload(&asset.id, &file.id).await?;
            debug!("Started multipart upload for file {}", file.id);
            builder = builder
                .with_upload_url(multipart.upload_url)
                .with_upload_auth_token(multipart.authorization_token)
                .with_multipart_file_id(multipart.file_id.unwrap_or_else(|| file.id.clone()));
        } else {
            let upload_url = file
                .resolved_upload_url()
                .ok_or_else(|| UploadError::missing_field(format!("File {} has no upload URL", file.id)))?;
            let token = file.authorization_token().ok_or_else(|| {
                UploadError::missing_field(format!("File {} has no upload credentials", file.id))
            })?;
            builder = builder
                .with_upload_url(upload_url)
                .with_upload_auth_token(token);
        }

        let job = self
            .create_job(&CreateJobRequest::transfer_started(
                asset.id.as_str(),
                format!("Upload {}", local.file_name),
            ))
            .await?;

        let upload = builder.with_job_id(job.id).build()?;
        info!(
            "Prepared asset {} for {} upload of {} bytes",
            upload.asset_id,
            if upload.is_multipart() { "multipart" } else { "single" },
            upload.size
        );
        Ok(upload)
    }

    /// Close the file and the job once the bytes are in storage.
    pub async fn finish_upload(
        &self,
        upload: &NewAssetUpload,
        request_keyframes: bool,
    ) -> Result<(), UploadError> {
        if upload.is_multipart() {
            self.finish_multipart_upload(&upload.asset_id, &upload.file_id, &upload.sha1_list)
                .await?;
        }

        self.update_file_status(&upload.asset_id, &upload.file_id, &FileStatusUpdate::closed())
            .await?;
        self.update_job(&upload.job_id, &JobUpdate::finished()).await?;

        if request_keyframes {
            self.request_keyframes(&upload.asset_id, &upload.file_id)
                .await?;
        }

        info!("Upload of asset {} finished", upload.asset_id);
        Ok(())
    }

    /// Mark the transfer job as failed.
    pub async fn fail_upload(&self, upload: &NewAssetUpload) -> Result<(), UploadError> {
        self.update_job(&upload.job_id, &JobUpdate::failed()).await?;
        Ok(())
    }
}
