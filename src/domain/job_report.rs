use serde::Serialize;

use super::{AudioId, ProcessingStatus};

/// Result of a finished pipeline run, also served by the report surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobReport {
    pub audio_id: AudioId,
    pub transcript: Option<String>,
    pub summary: Option<String>,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobStatusView {
    pub done: bool,
    pub status: ProcessingStatus,
}
