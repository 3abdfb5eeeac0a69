use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{SpeechToText, Stage, StageError};
use crate::infrastructure::text_processing::sanitize_provider_text;

use super::audio_mime::audio_mime_type;

pub struct OpenAiWhisperSpeechToText {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    language: String,
}

impl OpenAiWhisperSpeechToText {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
            language: language.into(),
        }
    }
}

#[async_trait]
impl SpeechToText for OpenAiWhisperSpeechToText {
    async fn convert(&self, audio_path: &Path) -> Result<String, StageError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| StageError::io(Stage::SpeechToText, e.to_string()))?;
        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        let file_part = multipart::Part::bytes(audio)
            .file_name(file_name)
            .mime_str(audio_mime_type(audio_path))
            .map_err(|e| StageError::provider(Stage::SpeechToText, format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", self.language.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, language = %self.language, "Sending audio to Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| StageError::network(Stage::SpeechToText, format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StageError::provider(
                Stage::SpeechToText,
                format!("status {}: {}", status, body),
            ));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| StageError::invalid_response(Stage::SpeechToText, format!("body: {}", e)))?;

        tracing::info!(chars = transcript.len(), "Whisper transcription completed");

        Ok(sanitize_provider_text(&transcript))
    }
}
