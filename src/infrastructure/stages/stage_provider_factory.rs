use std::sync::Arc;

use crate::application::ports::{Stage, StageError};
use crate::application::services::StageProviders;
use crate::infrastructure::audio::{DeepgramSpeechToText, OpenAiWhisperSpeechToText};
use crate::infrastructure::llm::{OpenAiChatClient, OpenAiKeyPointExtractor, OpenAiSummarizer};
use crate::infrastructure::text_processing::{ExtractiveSummarizer, SentenceKeyPointExtractor};
use crate::presentation::config::ProviderSettings;

const ENGLISH_LANGUAGE_TAG: &str = "en-US";
const ARABIC_LANGUAGE_TAG: &str = "ar";

/// Builds the six stage implementations the strategy registry selects from.
pub struct StageProviderFactory;

impl StageProviderFactory {
    pub fn create(settings: &ProviderSettings) -> Result<StageProviders, StageError> {
        let deepgram_key = require_key(
            settings.deepgram.api_key.as_deref(),
            Stage::SpeechToText,
            "providers.deepgram.api_key",
        )?;
        let openai_key = require_key(
            settings.openai.api_key.as_deref(),
            Stage::Summarization,
            "providers.openai.api_key",
        )?;

        let chat = Arc::new(OpenAiChatClient::new(openai_key.clone(), &settings.openai));

        Ok(StageProviders {
            english_speech_to_text: Arc::new(DeepgramSpeechToText::new(
                deepgram_key,
                Some(settings.deepgram.base_url.clone()),
                Some(settings.deepgram.model.clone()),
                ENGLISH_LANGUAGE_TAG,
            )),
            arabic_speech_to_text: Arc::new(OpenAiWhisperSpeechToText::new(
                openai_key,
                Some(settings.openai.base_url.clone()),
                Some(settings.openai.whisper_model.clone()),
                ARABIC_LANGUAGE_TAG,
            )),
            basic_summarizer: Arc::new(ExtractiveSummarizer::new(
                settings.basic.summary_sentences,
            )),
            advanced_summarizer: Arc::new(OpenAiSummarizer::new(Arc::clone(&chat))),
            basic_key_points: Arc::new(SentenceKeyPointExtractor::new(
                settings.basic.key_point_count,
            )),
            advanced_key_points: Arc::new(OpenAiKeyPointExtractor::new(chat)),
        })
    }
}

fn require_key(value: Option<&str>, stage: Stage, key: &str) -> Result<String, StageError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(StageError::configuration(
            stage,
            format!("missing {}", key),
        )),
    }
}
