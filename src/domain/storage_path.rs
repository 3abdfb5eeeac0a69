use std::fmt;

use url::Url;

use super::AudioId;

const DEFAULT_AUDIO_EXTENSION: &str = "mp3";
const MAX_EXTENSION_LEN: usize = 5;

/// File name a job's audio is staged under: `{audio_id}.{ext}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// The token must be a plain file name component; the extension falls
    /// back to `mp3` when the URL path does not carry a usable one.
    pub fn for_audio(audio_id: &AudioId, audio_url: &str) -> Result<Self, StoragePathError> {
        let token = audio_id.as_str();
        if token.trim().is_empty()
            || token.contains(['/', '\\', '\0'])
            || token.contains("..")
        {
            return Err(StoragePathError::UnsafeToken(token.to_string()));
        }

        let extension = extension_from_url(audio_url)
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_AUDIO_EXTENSION.to_string());
        Ok(Self(format!("{}.{}", token, extension)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn extension(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(_, ext)| ext)
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn extension_from_url(audio_url: &str) -> Option<String> {
    let url = Url::parse(audio_url.trim()).ok()?;
    let file_name = url.path_segments().and_then(|mut s| s.next_back())?;
    let (stem, extension) = file_name.rsplit_once('.')?;

    let valid = !stem.is_empty()
        && !extension.is_empty()
        && extension.len() <= MAX_EXTENSION_LEN
        && extension.chars().all(|c| c.is_ascii_alphanumeric());

    valid.then(|| extension.to_string())
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoragePathError {
    #[error("audio id {0:?} cannot be used as a file name")]
    UnsafeToken(String),
}
