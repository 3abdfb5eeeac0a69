use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::ACCEPT;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{AudioStager, Stage, StageError};
use crate::domain::{AudioId, StoragePath};
use crate::infrastructure::observability::redact_url;

/// Downloads job audio into a local folder as `{audio_id}.{ext}`.
pub struct HttpAudioStager {
    client: reqwest::Client,
    audios_folder: PathBuf,
}

impl HttpAudioStager {
    pub fn new(audios_folder: PathBuf, download_timeout: Duration) -> Result<Self, StageError> {
        std::fs::create_dir_all(&audios_folder).map_err(|e| {
            StageError::io(
                Stage::Staging,
                format!("cannot create {}: {}", audios_folder.display(), e),
            )
        })?;
        let client = reqwest::Client::builder()
            .timeout(download_timeout)
            .build()
            .map_err(|e| StageError::configuration(Stage::Staging, e.to_string()))?;

        Ok(Self {
            client,
            audios_folder,
        })
    }

    async fn download(&self, audio_url: &str, path: &Path) -> Result<u64, StageError> {
        let response = self
            .client
            .get(audio_url)
            .header(ACCEPT, "*/*")
            .send()
            .await
            .map_err(|e| StageError::network(Stage::Staging, format!("request: {}", e)))?;

        if !response.status().is_success() {
            return Err(StageError::network(
                Stage::Staging,
                format!("download returned status {}", response.status()),
            ));
        }

        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|e| StageError::io(Stage::Staging, e.to_string()))?;

        let mut total_bytes: u64 = 0;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let bytes =
                chunk.map_err(|e| StageError::network(Stage::Staging, format!("body: {}", e)))?;
            file.write_all(&bytes)
                .await
                .map_err(|e| StageError::io(Stage::Staging, e.to_string()))?;
            total_bytes += bytes.len() as u64;
        }

        file.flush()
            .await
            .map_err(|e| StageError::io(Stage::Staging, e.to_string()))?;

        Ok(total_bytes)
    }
}

#[async_trait]
impl AudioStager for HttpAudioStager {
    async fn fetch(&self, audio_url: &str, audio_id: &AudioId) -> Result<PathBuf, StageError> {
        let file_name = StoragePath::for_audio(audio_id, audio_url)
            .map_err(|e| StageError::io(Stage::Staging, e.to_string()))?;
        let path = self.audios_folder.join(file_name.as_str());

        tracing::info!(url = %redact_url(audio_url), path = %path.display(), "Downloading audio");

        match self.download(audio_url, &path).await {
            Ok(bytes) => {
                tracing::info!(bytes, "Audio downloaded");
                Ok(path)
            }
            Err(e) => {
                if let Err(cleanup) = self.release(&path).await {
                    tracing::warn!(error = %cleanup, "Failed to remove partial download");
                }
                Err(e)
            }
        }
    }

    async fn release(&self, path: &Path) -> Result<(), StageError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StageError::io(
                Stage::Staging,
                format!("cannot remove {}: {}", path.display(), e),
            )),
        }
    }
}
