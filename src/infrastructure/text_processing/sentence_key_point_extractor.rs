use async_trait::async_trait;

use crate::application::ports::{KeyPointExtractor, StageError};
use crate::domain::RawKeyPoints;

use super::sentences::split_sentences;

/// Local extractor that takes the leading sentences of its source as key points.
pub struct SentenceKeyPointExtractor {
    max_points: usize,
}

impl SentenceKeyPointExtractor {
    pub fn new(max_points: usize) -> Self {
        Self {
            max_points: max_points.max(1),
        }
    }
}

#[async_trait]
impl KeyPointExtractor for SentenceKeyPointExtractor {
    async fn extract(&self, source: &str) -> Result<RawKeyPoints, StageError> {
        let points = split_sentences(source)
            .into_iter()
            .take(self.max_points)
            .collect();
        Ok(RawKeyPoints::List(points))
    }
}
