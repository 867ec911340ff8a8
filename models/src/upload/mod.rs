mod builder;

pub use builder::NewAssetUploadBuilder;

use common::RedactedToken;

/// Everything allocated on Iconik for one new asset, plus the state needed to
/// push its bytes to storage and close the upload out afterwards.
#[derive(Debug, Clone)]
pub struct NewAssetUpload {
    pub asset_id: String,
    pub collection_id: String,
    pub storage_id: String,
    pub format_id: String,
    pub file_set_id: String,
    pub file_id: String,
    pub job_id: String,
    pub upload_url: String,
    pub upload_auth_token: RedactedToken,
    pub upload_filename: String,
    pub mime_type: String,
    pub size: u64,
    /// B2 file id of a started multipart upload; `None` for single-shot uploads.
    pub multipart_file_id: Option<String>,
    /// Part SHA-1 digests reported by B2, in part order.
    pub sha1_list: Vec<String>,
}

impl NewAssetUpload {
    pub fn is_multipart(&self) -> bool {
        self.multipart_file_id.is_some()
    }
}
