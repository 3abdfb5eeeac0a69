use async_trait::async_trait;

use crate::domain::RawKeyPoints;

use super::StageError;

#[async_trait]
pub trait KeyPointExtractor: Send + Sync {
    async fn extract(&self, source: &str) -> Result<RawKeyPoints, StageError>;
}
