use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{KeyPointExtractor, Stage, StageError};
use crate::domain::{KEY_POINT_DELIMITER, RawKeyPoints};
use crate::infrastructure::text_processing::sanitize_provider_text;

use super::openai_chat_client::OpenAiChatClient;

/// Asks the chat model for key points joined by the fixed delimiter.
pub struct OpenAiKeyPointExtractor {
    chat: Arc<OpenAiChatClient>,
}

impl OpenAiKeyPointExtractor {
    pub fn new(chat: Arc<OpenAiChatClient>) -> Self {
        Self { chat }
    }
}

fn key_point_instructions() -> String {
    format!(
        "Extract the key points of the text. Write each key point as one short \
         sentence in the language of the text. Return them on a single line separated \
         by ' {} ' with no numbering or bullets.",
        KEY_POINT_DELIMITER
    )
}

#[async_trait]
impl KeyPointExtractor for OpenAiKeyPointExtractor {
    async fn extract(&self, source: &str) -> Result<RawKeyPoints, StageError> {
        if source.trim().is_empty() {
            return Ok(RawKeyPoints::List(Vec::new()));
        }

        let answer = self
            .chat
            .complete(
                Stage::KeyPointExtraction,
                &key_point_instructions(),
                source,
            )
            .await?;

        Ok(RawKeyPoints::Delimited(sanitize_provider_text(&answer)))
    }
}
