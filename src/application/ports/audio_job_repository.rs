use async_trait::async_trait;

use crate::domain::{AudioId, AudioJob};

use super::RepositoryError;

/// Get/save contract of the job record store. Each call is atomic.
#[async_trait]
pub trait AudioJobRepository: Send + Sync {
    /// Inserts a new record. Fails with `ConstraintViolation` if the token exists.
    async fn create(&self, job: &AudioJob) -> Result<(), RepositoryError>;

    async fn get_by_token(&self, audio_id: &AudioId) -> Result<Option<AudioJob>, RepositoryError>;

    async fn save(&self, job: &AudioJob) -> Result<(), RepositoryError>;
}
