use std::path::Path;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;

use crate::application::ports::{SpeechToText, Stage, StageError};
use crate::infrastructure::text_processing::sanitize_provider_text;

use super::audio_mime::audio_mime_type;

const DEFAULT_BASE_URL: &str = "https://api.deepgram.com";
const DEFAULT_MODEL: &str = "nova-2";

/// Deepgram prerecorded transcription.
pub struct DeepgramSpeechToText {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    language: String,
}

#[derive(Deserialize)]
struct ListenResponse {
    results: ListenResults,
}

#[derive(Deserialize)]
struct ListenResults {
    channels: Vec<ListenChannel>,
}

#[derive(Deserialize)]
struct ListenChannel {
    alternatives: Vec<ListenAlternative>,
}

#[derive(Deserialize)]
struct ListenAlternative {
    transcript: String,
}

impl DeepgramSpeechToText {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            language: language.into(),
        }
    }
}

#[async_trait]
impl SpeechToText for DeepgramSpeechToText {
    async fn convert(&self, audio_path: &Path) -> Result<String, StageError> {
        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| StageError::io(Stage::SpeechToText, e.to_string()))?;

        tracing::debug!(
            model = %self.model,
            language = %self.language,
            bytes = audio.len(),
            "Sending audio to Deepgram"
        );

        let response = self
            .client
            .post(format!("{}/v1/listen", self.base_url))
            .query(&[
                ("model", self.model.as_str()),
                ("punctuate", "true"),
                ("language", self.language.as_str()),
            ])
            .header(AUTHORIZATION, format!("Token {}", self.api_key))
            .header(CONTENT_TYPE, audio_mime_type(audio_path))
            .body(audio)
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

        let listen: ListenResponse = response
            .json()
            .await
            .map_err(|e| StageError::invalid_response(Stage::SpeechToText, e.to_string()))?;

        let transcript = listen
            .results
            .channels
            .into_iter()
            .next()
            .and_then(|channel| channel.alternatives.into_iter().next())
            .map(|alternative| alternative.transcript)
            .ok_or_else(|| {
                StageError::invalid_response(Stage::SpeechToText, "no transcript alternatives")
            })?;

        tracing::info!(chars = transcript.len(), "Deepgram transcription completed");

        Ok(sanitize_provider_text(&transcript))
    }
}
