use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::application::ports::{AudioJobRepository, RepositoryError};
use crate::domain::{AudioId, AudioJob, ProcessingStatus};

/// Process-local job store. Keeps every persisted status per token so the
/// sequence of checkpoints can be inspected.
#[derive(Default)]
pub struct InMemoryAudioJobRepository {
    jobs: RwLock<HashMap<AudioId, AudioJob>>,
    status_history: RwLock<HashMap<AudioId, Vec<ProcessingStatus>>>,
}

impl InMemoryAudioJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn status_history(&self, audio_id: &AudioId) -> Vec<ProcessingStatus> {
        self.status_history
            .read()
            .await
            .get(audio_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Every stored record, in no particular order.
    pub async fn snapshot(&self) -> Vec<AudioJob> {
        self.jobs.read().await.values().cloned().collect()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }

    async fn record_status(&self, job: &AudioJob) {
        self.status_history
            .write()
            .await
            .entry(job.audio_id.clone())
            .or_default()
            .push(job.status);
    }
}

#[async_trait::async_trait]
impl AudioJobRepository for InMemoryAudioJobRepository {
    async fn create(&self, job: &AudioJob) -> Result<(), RepositoryError> {
        {
            let mut jobs = self.jobs.write().await;
            if jobs.contains_key(&job.audio_id) {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "audio token already exists: {}",
                    job.audio_id
                )));
            }
            jobs.insert(job.audio_id.clone(), job.clone());
        }
        self.record_status(job).await;
        Ok(())
    }

    async fn get_by_token(&self, audio_id: &AudioId) -> Result<Option<AudioJob>, RepositoryError> {
        Ok(self.jobs.read().await.get(audio_id).cloned())
    }

    async fn save(&self, job: &AudioJob) -> Result<(), RepositoryError> {
        self.jobs
            .write()
            .await
            .insert(job.audio_id.clone(), job.clone());
        self.record_status(job).await;
        Ok(())
    }
}
