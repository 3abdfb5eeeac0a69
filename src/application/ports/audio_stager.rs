use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::AudioId;

use super::StageError;

/// Moves remote audio onto local storage for the duration of one job.
#[async_trait]
pub trait AudioStager: Send + Sync {
    /// Downloads `audio_url` and returns the local path. A failed download
    /// leaves no partial file behind.
    async fn fetch(&self, audio_url: &str, audio_id: &AudioId) -> Result<PathBuf, StageError>;

    /// Removes a staged file. Removing an already missing file succeeds.
    async fn release(&self, path: &Path) -> Result<(), StageError>;
}
