mod audio_job_repository;
mod audio_stager;
mod job_queue;
mod key_point_extractor;
mod repository_error;
mod speech_to_text;
mod stage_error;
mod summarizer;

pub use audio_job_repository::AudioJobRepository;
pub use audio_stager::AudioStager;
pub use job_queue::{JobDelivery, JobPublisher, JobSource, QueueError};
pub use key_point_extractor::KeyPointExtractor;
pub use repository_error::RepositoryError;
pub use speech_to_text::SpeechToText;
pub use stage_error::{Stage, StageError, StageErrorKind};
pub use summarizer::Summarizer;
