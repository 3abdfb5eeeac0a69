use serde::{Deserialize, Deserializer, Serialize};

use super::{AudioId, UserPlan};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Queue payload describing one unit of work. Immutable once published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptor {
    pub audio_id: AudioId,
    pub audio_url: String,
    #[serde(default = "default_language", deserialize_with = "language_or_default")]
    pub main_language: String,
    #[serde(default, deserialize_with = "plan_or_default")]
    pub user_plan: UserPlan,
}

impl JobDescriptor {
    pub fn new(
        audio_id: AudioId,
        audio_url: impl Into<String>,
        main_language: impl Into<String>,
        user_plan: UserPlan,
    ) -> Self {
        Self {
            audio_id,
            audio_url: audio_url.into(),
            main_language: main_language.into(),
            user_plan,
        }
    }

    pub fn from_slice(payload: &[u8]) -> Result<Self, DescriptorError> {
        let descriptor: JobDescriptor = serde_json::from_slice(payload)
            .map_err(|e| DescriptorError::Malformed(e.to_string()))?;

        if descriptor.audio_id.as_str().trim().is_empty() {
            return Err(DescriptorError::MissingField("audio_id"));
        }
        if descriptor.audio_url.trim().is_empty() {
            return Err(DescriptorError::MissingField("audio_url"));
        }

        Ok(descriptor)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, DescriptorError> {
        serde_json::to_vec(self).map_err(|e| DescriptorError::Malformed(e.to_string()))
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn language_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(default_language))
}

fn plan_or_default<'de, D>(deserializer: D) -> Result<UserPlan, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| UserPlan::from_label(&v))
        .unwrap_or_default())
}

#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("malformed job descriptor: {0}")]
    Malformed(String),
    #[error("job descriptor is missing required field: {0}")]
    MissingField(&'static str),
}
