use crate::client::{IconikClient, JOBS_ENDPOINT, path_segment};
use crate::error::iconik_client::IconikClientError;

use models::{CreateJobRequest, Job, JobUpdate};

use log::debug;

impl IconikClient {
    pub async fn create_job(&self, request: &CreateJobRequest) -> Result<Job, IconikClientError> {
        let url = self.endpoint(JOBS_ENDPOINT)?;
        let job: Job = self.post_json(url, request).await?;
        debug!("Created job {} for {}", job.id, request.object_id);
        Ok(job)
    }

    pub async fn update_job(&self, job_id: &str, update: &JobUpdate) -> Result<Job, IconikClientError> {
        let url = self.endpoint(&format!("{JOBS_ENDPOINT}{}/", path_segment(job_id)?))?;
        self.patch_json(url, update).await
    }
}
