mod audio_job_worker;
mod audio_pipeline;
mod job_query_service;
mod staged_audio;
mod strategy_registry;
mod submission_service;

pub use audio_job_worker::{AudioJobWorker, DeliveryOutcome};
pub use audio_pipeline::{AudioPipeline, PipelineError, ProcessOutcome, RedeliveryPolicy};
pub use job_query_service::{JobQueryService, QueryError};
pub use staged_audio::StagedAudio;
pub use strategy_registry::{
    KeyPointStrategy, PipelineStages, SpeechToTextStrategy, StageProviders, StageSelection,
    StrategyRegistry, SummarizationStrategy,
};
pub use submission_service::{SubmissionError, SubmissionService, SubmitAudioRequest};
