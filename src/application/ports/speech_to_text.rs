use std::path::Path;

use async_trait::async_trait;

use super::StageError;

#[async_trait]
pub trait SpeechToText: Send + Sync {
    async fn convert(&self, audio_path: &Path) -> Result<String, StageError>;
}
