use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::sync::Arc;

use futures::FutureExt;

use crate::application::ports::{AudioJobRepository, AudioStager, RepositoryError, StageError};
use crate::domain::{
    AudioId, AudioJob, JobDescriptor, JobReport, ProcessingStatus, StatusTransitionError,
    normalize_key_points,
};

use super::staged_audio::StagedAudio;
use super::strategy_registry::StrategyRegistry;

/// What to do when a message arrives for a job that already finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedeliveryPolicy {
    #[default]
    SkipTerminal,
    Reprocess,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    Completed(JobReport),
    Skipped {
        audio_id: AudioId,
        status: ProcessingStatus,
    },
}

/// Worker-side state machine: stage audio, run the selected stages in order,
/// checkpoint the record after each one and release the audio afterwards.
pub struct AudioPipeline {
    repository: Arc<dyn AudioJobRepository>,
    stager: Arc<dyn AudioStager>,
    registry: StrategyRegistry,
    redelivery: RedeliveryPolicy,
}

impl AudioPipeline {
    pub fn new(
        repository: Arc<dyn AudioJobRepository>,
        stager: Arc<dyn AudioStager>,
        registry: StrategyRegistry,
        redelivery: RedeliveryPolicy,
    ) -> Self {
        Self {
            repository,
            stager,
            registry,
            redelivery,
        }
    }

    pub async fn process(&self, descriptor: &JobDescriptor) -> Result<ProcessOutcome, PipelineError> {
        let audio_id = &descriptor.audio_id;
        let mut job = self
            .repository
            .get_by_token(audio_id)
            .await?
            .ok_or_else(|| PipelineError::NotFound(audio_id.clone()))?;

        if job.status.is_terminal() && self.redelivery == RedeliveryPolicy::SkipTerminal {
            tracing::warn!(status = %job.status, "Job already terminal, skipping redelivery");
            return Ok(ProcessOutcome::Skipped {
                audio_id: audio_id.clone(),
                status: job.status,
            });
        }

        if job.status != ProcessingStatus::OnQueue {
            tracing::info!(
                status = %job.status,
                "Job was interrupted mid-pipeline, re-running from the start"
            );
        }

        let result = AssertUnwindSafe(self.run_stages(descriptor, &mut job))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(PipelineError::Unexpected(panic_message(panic.as_ref()))));

        match result {
            Ok(report) => {
                tracing::info!(key_points = report.key_points.len(), "Audio job completed");
                Ok(ProcessOutcome::Completed(report))
            }
            Err(e) => {
                self.record_failure(&mut job, &e).await;
                Err(e)
            }
        }
    }

    async fn run_stages(
        &self,
        descriptor: &JobDescriptor,
        job: &mut AudioJob,
    ) -> Result<JobReport, PipelineError> {
        let staged = StagedAudio::acquire(
            Arc::clone(&self.stager),
            &descriptor.audio_url,
            &descriptor.audio_id,
        )
        .await?;

        let result = AssertUnwindSafe(self.run_with_audio(descriptor, job, staged.path()))
            .catch_unwind()
            .await;
        staged.release().await;
        result.unwrap_or_else(|panic| Err(PipelineError::Unexpected(panic_message(panic.as_ref()))))
    }

    async fn run_with_audio(
        &self,
        descriptor: &JobDescriptor,
        job: &mut AudioJob,
        audio_path: &Path,
    ) -> Result<JobReport, PipelineError> {
        let stages = self
            .registry
            .select(&descriptor.main_language, descriptor.user_plan);
        tracing::debug!(selection = ?stages.selection, "Stage strategies selected");

        let transcript = stages.speech_to_text.convert(audio_path).await?;
        job.transcript = Some(transcript.clone());
        self.checkpoint(job, ProcessingStatus::SttProcessed).await?;

        let summary = stages
            .summarizer
            .summarize(&transcript, &descriptor.main_language)
            .await?;
        job.summarization = Some(summary.clone());
        self.checkpoint(job, ProcessingStatus::SummaryProcessed)
            .await?;

        let raw_key_points = stages.key_point_extractor.extract(&summary).await?;
        let key_points = normalize_key_points(raw_key_points);
        job.key_points = key_points.clone();
        self.checkpoint(job, ProcessingStatus::KeyPointsProcessed)
            .await?;

        self.checkpoint(job, ProcessingStatus::Completed).await?;

        Ok(JobReport {
            audio_id: descriptor.audio_id.clone(),
            transcript: Some(transcript),
            summary: Some(summary),
            key_points,
        })
    }

    async fn checkpoint(
        &self,
        job: &mut AudioJob,
        reached: ProcessingStatus,
    ) -> Result<(), PipelineError> {
        if job.checkpoint(reached)? {
            tracing::debug!(status = %reached, "Job status transition");
        } else {
            tracing::debug!(
                status = %job.status,
                replayed = %reached,
                "Checkpoint replayed without status change"
            );
        }
        self.repository.save(job).await?;
        Ok(())
    }

    async fn record_failure(&self, job: &mut AudioJob, error: &PipelineError) {
        tracing::error!(error = %error, "Audio job failed");

        if let Err(e) = job.mark_failed(error.to_string()) {
            tracing::warn!(error = %e, "Job cannot be marked as failed");
            return;
        }

        if let Err(e) = self.repository.save(job).await {
            tracing::error!(error = %e, "Failed to persist job failure");
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "stage panicked".to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("audio job not found: {0}")]
    NotFound(AudioId),
    #[error(transparent)]
    Stage(#[from] StageError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    InvalidTransition(#[from] StatusTransitionError),
    #[error("unexpected fault: {0}")]
    Unexpected(String),
}
