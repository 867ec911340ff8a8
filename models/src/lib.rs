//! Data structures mirroring the Iconik REST API JSON schemas.
//!
//! Models carry no behaviour beyond construction helpers; they are
//! serialized, sent, and discarded by `iconik-client`.

pub mod api_error;
pub mod asset;
pub mod error;
pub mod file;
pub mod job;
pub mod listing;
pub mod search;
pub mod storage;
pub mod upload;

pub use api_error::{ApiErrorBody, UNPARSABLE_ERROR_MESSAGE};
pub use asset::{Asset, Collection, CollectionContent, CreateAssetRequest};
pub use error::model_error::ModelError;
pub use file::{
    CreateFileRequest, CreateFileSetRequest, CreateFormatRequest, File, FileSet, FileStatus,
    FileStatusUpdate, Format, FormatMetadata, MultipartFinish, MultipartStart, UploadCredentials,
};
pub use job::{CreateJobRequest, Job, JobStatus, JobType, JobUpdate};
pub use listing::{ObjectList, ProxyDownloadUrl, UrlObject};
pub use search::{
    FileSummary, FilterTerm, ProxySummary, SearchCriteria, SearchFilter, SearchObject,
    SearchResponse,
};
pub use storage::Storage;
pub use upload::{NewAssetUpload, NewAssetUploadBuilder};

#[cfg(test)]
mod tests;
