use chrono::{DateTime, Utc};

use super::{
    AudioId, JobDescriptor, JobReport, JobStatusView, ProcessingStatus, StatusTransitionError,
    UserPlan,
};

/// Persistent record of one audio job, keyed by its token.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioJob {
    pub audio_id: AudioId,
    pub audio_url: String,
    pub transcript: Option<String>,
    pub summarization: Option<String>,
    pub key_points: Vec<String>,
    pub status: ProcessingStatus,
    pub error_message: Option<String>,
    pub main_language: String,
    pub user_plan: UserPlan,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AudioJob {
    pub fn new(audio_url: String, main_language: String, user_plan: UserPlan) -> Self {
        Self::with_id(AudioId::new(), audio_url, main_language, user_plan)
    }

    pub fn with_id(
        audio_id: AudioId,
        audio_url: String,
        main_language: String,
        user_plan: UserPlan,
    ) -> Self {
        let now = Utc::now();
        Self {
            audio_id,
            audio_url,
            transcript: None,
            summarization: None,
            key_points: Vec::new(),
            status: ProcessingStatus::OnQueue,
            error_message: None,
            main_language,
            user_plan,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn transition_to(&mut self, next: ProcessingStatus) -> Result<(), StatusTransitionError> {
        if !self.status.can_transition_to(next) {
            return Err(StatusTransitionError {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Records that `reached` has been completed.
    ///
    /// When a redelivered job is re-run, a stage may finish again while the
    /// stored status is already at or past it. The status is then kept as is.
    /// Returns whether the status moved.
    pub fn checkpoint(&mut self, reached: ProcessingStatus) -> Result<bool, StatusTransitionError> {
        let is_replay = match (self.status.rank(), reached.rank()) {
            (Some(current), Some(target)) => !self.status.is_terminal() && target <= current,
            _ => false,
        };

        if is_replay {
            self.updated_at = Utc::now();
            return Ok(false);
        }

        self.transition_to(reached)?;
        Ok(true)
    }

    pub fn mark_failed(&mut self, message: impl Into<String>) -> Result<(), StatusTransitionError> {
        self.transition_to(ProcessingStatus::Failed)?;
        self.error_message = Some(message.into());
        Ok(())
    }

    pub fn descriptor(&self) -> JobDescriptor {
        JobDescriptor::new(
            self.audio_id.clone(),
            self.audio_url.clone(),
            self.main_language.clone(),
            self.user_plan,
        )
    }

    pub fn status_view(&self) -> JobStatusView {
        JobStatusView {
            done: self.status == ProcessingStatus::Completed,
            status: self.status,
        }
    }

    pub fn report(&self) -> JobReport {
        JobReport {
            audio_id: self.audio_id.clone(),
            transcript: self.transcript.clone(),
            summary: self.summarization.clone(),
            key_points: self.key_points.clone(),
        }
    }
}
