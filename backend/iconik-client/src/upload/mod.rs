//! The "create an asset and upload a file" workflow.
//!
//! asset -> collection -> storage -> format -> fileset -> file -> (multipart start)
//! -> job, then the byte transfer, then file/job close-out. Each step is one
//! REST call and the first failure aborts the sequence.

pub mod b2;
pub mod local_file;
pub(crate) mod workflow;

pub use b2::B2Transfer;
pub use local_file::LocalFile;

use crate::client::IconikClient;
use crate::config::ClientConfig;
use crate::error::upload::UploadError;

use models::NewAssetUpload;

use log::{error, info, warn};

/// What to create on Iconik for one local file.
#[derive(Debug, Clone)]
pub struct NewAssetSpec {
    pub collection_id: String,
    pub title: String,
    /// Directory inside the storage, e.g. `/` or `/lectures/2024`.
    pub storage_path: String,
    pub local: LocalFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadOptions {
    pub multipart_threshold_bytes: u64,
    pub request_keyframes: bool,
}

impl From<&ClientConfig> for UploadOptions {
    fn from(config: &ClientConfig) -> Self {
        Self {
            multipart_threshold_bytes: config.multipart_threshold_bytes,
            request_keyframes: config.request_keyframes,
        }
    }
}

/// Run the whole workflow for one file.
///
/// When the byte transfer fails the job is marked `FAILED` before the
/// transfer error is returned.
pub async fn upload_new_asset(
    client: &IconikClient,
    transfer: &B2Transfer,
    spec: &NewAssetSpec,
    options: UploadOptions,
) -> Result<NewAssetUpload, UploadError> {
    let mut upload = client
        .make_new_asset(spec, options.multipart_threshold_bytes)
        .await?;

    if let Err(e) = transfer.transfer(&mut upload, &spec.local.path).await {
        error!("Transfer of {} failed: {e}", spec.local.path.display());
        if let Err(mark_err) = client.fail_upload(&upload).await {
            warn!("Could not mark job {} as failed: {mark_err}", upload.job_id);
        }
        return Err(e);
    }

    client
        .finish_upload(&upload, options.request_keyframes)
        .await?;

    info!(
        "Asset {} uploaded to collection {}",
        upload.asset_id, upload.collection_id
    );
    Ok(upload)
}
