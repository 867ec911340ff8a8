use crate::{CreateJobRequest, Job, JobStatus, JobUpdate};

use serde_json::json;

/// **VALUE**: Verifies the transfer job payload created at the start of an upload.
#[test]
fn given_transfer_job_when_serialized_then_targets_asset() {
    let request = CreateJobRequest::transfer_started("asset-1", "Upload one.mp4");

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "object_type": "assets",
            "object_id": "asset-1",
            "type": "TRANSFER",
            "status": "STARTED",
            "title": "Upload one.mp4",
            "progress_processed": 0
        })
    );
}

#[test]
fn given_failed_update_when_serialized_then_omits_progress() {
    assert_eq!(
        serde_json::to_value(JobUpdate::failed()).unwrap(),
        json!({"status": "FAILED"})
    );
}

#[test]
fn given_job_response_when_decoded_then_parses_status() {
    let job: Job = serde_json::from_value(json!({"id": "j1", "status": "FINISHED"})).unwrap();

    assert_eq!(job.id, "j1");
    assert_eq!(job.status, Some(JobStatus::Finished));
}
