use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Staging,
    SpeechToText,
    Summarization,
    KeyPointExtraction,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Staging => "staging",
            Stage::SpeechToText => "speech-to-text",
            Stage::Summarization => "summarization",
            Stage::KeyPointExtraction => "key-point extraction",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageErrorKind {
    Network,
    Provider,
    InvalidResponse,
    Io,
    Configuration,
    Unexpected,
}

impl StageErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageErrorKind::Network => "network",
            StageErrorKind::Provider => "provider",
            StageErrorKind::InvalidResponse => "invalid response",
            StageErrorKind::Io => "io",
            StageErrorKind::Configuration => "configuration",
            StageErrorKind::Unexpected => "unexpected",
        }
    }
}

impl fmt::Display for StageErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of one staging or provider call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{stage} failed ({kind}): {message}")]
pub struct StageError {
    pub stage: Stage,
    pub kind: StageErrorKind,
    pub message: String,
}

impl StageError {
    pub fn new(stage: Stage, kind: StageErrorKind, message: impl Into<String>) -> Self {
        Self {
            stage,
            kind,
            message: message.into(),
        }
    }

    pub fn network(stage: Stage, message: impl Into<String>) -> Self {
        Self::new(stage, StageErrorKind::Network, message)
    }

    pub fn provider(stage: Stage, message: impl Into<String>) -> Self {
        Self::new(stage, StageErrorKind::Provider, message)
    }

    pub fn invalid_response(stage: Stage, message: impl Into<String>) -> Self {
        Self::new(stage, StageErrorKind::InvalidResponse, message)
    }

    pub fn io(stage: Stage, message: impl Into<String>) -> Self {
        Self::new(stage, StageErrorKind::Io, message)
    }

    pub fn configuration(stage: Stage, message: impl Into<String>) -> Self {
        Self::new(stage, StageErrorKind::Configuration, message)
    }
}
