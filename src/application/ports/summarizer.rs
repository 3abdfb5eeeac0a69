use async_trait::async_trait;

use super::StageError;

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript: &str, language: &str) -> Result<String, StageError>;
}
