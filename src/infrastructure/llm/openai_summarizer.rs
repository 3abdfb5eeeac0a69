use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{Stage, StageError, Summarizer};
use crate::infrastructure::text_processing::{EMPTY_TRANSCRIPT_SUMMARY, sanitize_provider_text};

use super::openai_chat_client::OpenAiChatClient;

pub struct OpenAiSummarizer {
    chat: Arc<OpenAiChatClient>,
}

impl OpenAiSummarizer {
    pub fn new(chat: Arc<OpenAiChatClient>) -> Self {
        Self { chat }
    }
}

fn summary_instructions(language: &str) -> String {
    format!(
        "You summarize spoken audio transcripts. Write a concise summary that keeps \
         names, numbers and decisions. Answer in the language with code '{}' and \
         return only the summary text.",
        language
    )
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, transcript: &str, language: &str) -> Result<String, StageError> {
        if transcript.trim().is_empty() {
            return Ok(EMPTY_TRANSCRIPT_SUMMARY.to_string());
        }

        tracing::debug!(model = %self.chat.model(), chars = transcript.len(), "Requesting summary");

        let summary = self
            .chat
            .complete(
                Stage::Summarization,
                &summary_instructions(language),
                transcript,
            )
            .await?;

        let summary = sanitize_provider_text(&summary);
        if summary.is_empty() {
            return Err(StageError::invalid_response(
                Stage::Summarization,
                "provider returned an empty summary",
            ));
        }
        Ok(summary)
    }
}
