use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    OnQueue,
    SttProcessed,
    SummaryProcessed,
    KeyPointsProcessed,
    Completed,
    Failed,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::OnQueue => "ON_QUEUE",
            ProcessingStatus::SttProcessed => "STT_PROCESSED",
            ProcessingStatus::SummaryProcessed => "SUMMARY_PROCESSED",
            ProcessingStatus::KeyPointsProcessed => "KEY_POINTS_PROCESSED",
            ProcessingStatus::Completed => "COMPLETED",
            ProcessingStatus::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcessingStatus::Completed | ProcessingStatus::Failed)
    }

    /// The next status on the happy path, `None` once terminal.
    pub fn successor(&self) -> Option<ProcessingStatus> {
        match self {
            ProcessingStatus::OnQueue => Some(ProcessingStatus::SttProcessed),
            ProcessingStatus::SttProcessed => Some(ProcessingStatus::SummaryProcessed),
            ProcessingStatus::SummaryProcessed => Some(ProcessingStatus::KeyPointsProcessed),
            ProcessingStatus::KeyPointsProcessed => Some(ProcessingStatus::Completed),
            ProcessingStatus::Completed | ProcessingStatus::Failed => None,
        }
    }

    /// Position on the happy path. `Failed` sits outside it.
    pub fn rank(&self) -> Option<u8> {
        match self {
            ProcessingStatus::OnQueue => Some(0),
            ProcessingStatus::SttProcessed => Some(1),
            ProcessingStatus::SummaryProcessed => Some(2),
            ProcessingStatus::KeyPointsProcessed => Some(3),
            ProcessingStatus::Completed => Some(4),
            ProcessingStatus::Failed => None,
        }
    }

    /// Forward by exactly one step, or to `Failed` from any non-terminal state.
    pub fn can_transition_to(&self, next: ProcessingStatus) -> bool {
        match next {
            ProcessingStatus::Failed => !self.is_terminal(),
            _ => self.successor() == Some(next),
        }
    }
}

impl FromStr for ProcessingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ON_QUEUE" => Ok(ProcessingStatus::OnQueue),
            "STT_PROCESSED" => Ok(ProcessingStatus::SttProcessed),
            "SUMMARY_PROCESSED" => Ok(ProcessingStatus::SummaryProcessed),
            "KEY_POINTS_PROCESSED" => Ok(ProcessingStatus::KeyPointsProcessed),
            "COMPLETED" => Ok(ProcessingStatus::Completed),
            "FAILED" => Ok(ProcessingStatus::Failed),
            _ => Err(format!("Invalid processing status: {}", s)),
        }
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid status transition: {from} -> {to}")]
pub struct StatusTransitionError {
    pub from: ProcessingStatus,
    pub to: ProcessingStatus,
}
