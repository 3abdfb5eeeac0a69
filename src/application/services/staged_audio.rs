use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{AudioStager, StageError};
use crate::domain::AudioId;

/// Staged audio file owned by the running job.
///
/// Callers await [`StagedAudio::release`] on every exit, including stage
/// panics. Dropping the guard unreleased only happens when the owning task is
/// cancelled, and removal is then spawned onto the current runtime.
pub struct StagedAudio {
    path: PathBuf,
    stager: Arc<dyn AudioStager>,
    released: bool,
}

impl StagedAudio {
    pub async fn acquire(
        stager: Arc<dyn AudioStager>,
        audio_url: &str,
        audio_id: &AudioId,
    ) -> Result<Self, StageError> {
        let path = stager.fetch(audio_url, audio_id).await?;
        tracing::debug!(path = %path.display(), "Audio staged");
        Ok(Self {
            path,
            stager,
            released: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn release(mut self) {
        self.released = true;
        match self.stager.release(&self.path).await {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Staged audio released"),
            Err(e) => tracing::warn!(
                error = %e,
                path = %self.path.display(),
                "Failed to release staged audio"
            ),
        }
    }
}

impl Drop for StagedAudio {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        let path = std::mem::take(&mut self.path);
        let stager = Arc::clone(&self.stager);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = stager.release(&path).await {
                        tracing::warn!(
                            error = %e,
                            path = %path.display(),
                            "Failed to release staged audio after abnormal exit"
                        );
                    }
                });
            }
            Err(_) => tracing::warn!(
                path = %path.display(),
                "No runtime available, staged audio left on disk"
            ),
        }
    }
}
