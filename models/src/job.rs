use crate::asset::ASSETS_OBJECT_TYPE;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Ready,
    Started,
    Finished,
    Failed,
    Aborted,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    Transfer,
    Transcode,
    #[serde(other)]
    Unknown,
}

/// Body of `POST jobs/v1/jobs/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub object_type: String,
    pub object_id: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub status: JobStatus,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_processed: Option<u8>,
}

impl CreateJobRequest {
    /// A started transfer job tracking the upload of `asset_id`.
    pub fn transfer_started(asset_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            object_type: ASSETS_OBJECT_TYPE.to_string(),
            object_id: asset_id.into(),
            job_type: JobType::Transfer,
            status: JobStatus::Started,
            title: title.into(),
            progress_processed: Some(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

/// Body of `PATCH jobs/v1/jobs/{job}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobUpdate {
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_processed: Option<u8>,
}

impl JobUpdate {
    pub fn finished() -> Self {
        Self {
            status: JobStatus::Finished,
            progress_processed: Some(100),
        }
    }

    pub fn failed() -> Self {
        Self {
            status: JobStatus::Failed,
            progress_processed: None,
        }
    }
}
