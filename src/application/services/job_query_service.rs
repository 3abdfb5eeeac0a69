use std::sync::Arc;

use crate::application::ports::{AudioJobRepository, RepositoryError};
use crate::domain::{AudioId, AudioJob, JobReport, JobStatusView};

/// Read side backing the status and report endpoints.
pub struct JobQueryService {
    repository: Arc<dyn AudioJobRepository>,
}

impl JobQueryService {
    pub fn new(repository: Arc<dyn AudioJobRepository>) -> Self {
        Self { repository }
    }

    pub async fn status(&self, audio_id: &AudioId) -> Result<JobStatusView, QueryError> {
        Ok(self.load(audio_id).await?.status_view())
    }

    /// Partial results are returned as they are for jobs that failed midway.
    pub async fn report(&self, audio_id: &AudioId) -> Result<JobReport, QueryError> {
        Ok(self.load(audio_id).await?.report())
    }

    async fn load(&self, audio_id: &AudioId) -> Result<AudioJob, QueryError> {
        self.repository
            .get_by_token(audio_id)
            .await?
            .ok_or_else(|| QueryError::NotFound(audio_id.clone()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("audio job not found: {0}")]
    NotFound(AudioId),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
