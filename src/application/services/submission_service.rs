use std::sync::Arc;

use crate::application::ports::{AudioJobRepository, JobPublisher, QueueError, RepositoryError};
use crate::domain::{AudioId, AudioJob, DEFAULT_LANGUAGE, UserPlan};

#[derive(Debug, Clone, Default)]
pub struct SubmitAudioRequest {
    pub audio_url: Option<String>,
    pub main_language: Option<String>,
    pub user_plan: Option<String>,
}

/// Producer side: creates the job record and publishes its descriptor.
pub struct SubmissionService {
    repository: Arc<dyn AudioJobRepository>,
    publisher: Arc<dyn JobPublisher>,
}

impl SubmissionService {
    pub fn new(repository: Arc<dyn AudioJobRepository>, publisher: Arc<dyn JobPublisher>) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    pub async fn submit(&self, request: SubmitAudioRequest) -> Result<AudioId, SubmissionError> {
        let audio_url = non_blank(request.audio_url)
            .ok_or_else(|| SubmissionError::Validation("audio_url is required".to_string()))?;
        let main_language =
            non_blank(request.main_language).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let user_plan = request
            .user_plan
            .as_deref()
            .map(UserPlan::from_label)
            .unwrap_or_default();

        let mut job = AudioJob::new(audio_url, main_language, user_plan);
        self.repository.create(&job).await?;

        if let Err(e) = self.publisher.publish(&job.descriptor()).await {
            tracing::error!(audio_id = %job.audio_id, error = %e, "Failed to enqueue audio job");
            match job.mark_failed(e.to_string()) {
                Ok(()) => {
                    if let Err(save_err) = self.repository.save(&job).await {
                        tracing::error!(error = %save_err, "Failed to mark unqueued job as failed");
                    }
                }
                Err(transition_err) => {
                    tracing::warn!(error = %transition_err, "Unqueued job cannot be marked as failed");
                }
            }
            return Err(SubmissionError::Infrastructure(e));
        }

        tracing::info!(audio_id = %job.audio_id, plan = %user_plan, "Audio job submitted");
        Ok(job.audio_id)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("queue unavailable: {0}")]
    Infrastructure(QueueError),
}
