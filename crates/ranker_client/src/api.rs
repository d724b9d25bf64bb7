use std::sync::Arc;

use ranker_core::{JobDraft, ParsedResume, RankingRow, SkillFrequency, UploadFile};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::wire::{
    CreateJobRequest, CreateJobResponse, RankTriggerResponse, RankingRowRecord, TopSkillRecord,
    UploadResponse,
};
use crate::{FailureKind, ProgressSink, Transport, TransportError};

pub const UPLOAD_PATH: &str = "/api/resumes/upload";
pub const JOBS_PATH: &str = "/api/jobs";
pub const TOP_SKILLS_PATH: &str = "/api/analytics/top-skills";

/// Typed access to the ranking backend on top of any `Transport`.
#[derive(Clone)]
pub struct RankerApi {
    transport: Arc<dyn Transport>,
}

impl RankerApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn upload_resume(
        &self,
        file: UploadFile,
        progress: Arc<dyn ProgressSink>,
    ) -> Result<ParsedResume, TransportError> {
        let value = self
            .transport
            .post_multipart(UPLOAD_PATH, file, progress)
            .await?;
        decode::<UploadResponse>(value).map(ParsedResume::from)
    }

    /// Creates a job posting and returns the backend's id for it.
    pub async fn create_job(&self, draft: &JobDraft) -> Result<String, TransportError> {
        let body = serde_json::to_value(CreateJobRequest {
            title: &draft.title,
            description: &draft.description,
            skills: &draft.skills,
        })
        .map_err(|err| TransportError::new(FailureKind::InvalidResponse, err.to_string()))?;
        let value = self.transport.post(JOBS_PATH, Some(body)).await?;
        decode::<CreateJobResponse>(value).map(|response| response.job_id.into())
    }

    /// Asks the backend to recompute rankings; returns its reported status.
    pub async fn trigger_ranking(&self, job_id: &str) -> Result<String, TransportError> {
        let value = self
            .transport
            .post(&job_path(job_id, "rank")?, None)
            .await?;
        decode::<RankTriggerResponse>(value).map(|response| response.status)
    }

    /// Ranking list in backend order.
    pub async fn fetch_rankings(&self, job_id: &str) -> Result<Vec<RankingRow>, TransportError> {
        let value = self.transport.get(&job_path(job_id, "rankings")?).await?;
        let records = decode::<Vec<RankingRowRecord>>(value)?;
        Ok(records.into_iter().map(RankingRow::from).collect())
    }

    pub async fn fetch_top_skills(&self) -> Result<Vec<SkillFrequency>, TransportError> {
        let value = self.transport.get(TOP_SKILLS_PATH).await?;
        let records = decode::<Vec<TopSkillRecord>>(value)?;
        Ok(records.into_iter().map(SkillFrequency::from).collect())
    }
}

/// `/api/jobs/{job_id}/{action}` with the job id encoded as one path segment.
pub fn job_path(job_id: &str, action: &str) -> Result<String, TransportError> {
    let mut scratch = Url::parse("http://localhost/")
        .map_err(|err| TransportError::new(FailureKind::InvalidUrl, err.to_string()))?;
    scratch
        .path_segments_mut()
        .map_err(|_| TransportError::new(FailureKind::InvalidUrl, "cannot-be-a-base url"))?
        .clear()
        .extend(["api", "jobs", job_id, action]);
    Ok(scratch.path().to_string())
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, TransportError> {
    serde_json::from_value(value)
        .map_err(|err| TransportError::new(FailureKind::InvalidResponse, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_path_encodes_segment() {
        assert_eq!(job_path("12", "rank").unwrap(), "/api/jobs/12/rank");
        assert_eq!(
            job_path("a/b c", "rankings").unwrap(),
            "/api/jobs/a%2Fb%20c/rankings"
        );
    }
}
