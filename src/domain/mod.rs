mod audio_id;
mod audio_job;
mod job_descriptor;
mod job_report;
mod key_points;
mod processing_status;
mod storage_path;
mod user_plan;

pub use audio_id::AudioId;
pub use audio_job::AudioJob;
pub use job_descriptor::{DEFAULT_LANGUAGE, DescriptorError, JobDescriptor};
pub use job_report::{JobReport, JobStatusView};
pub use key_points::{KEY_POINT_DELIMITER, RawKeyPoints, normalize_key_points};
pub use processing_status::{ProcessingStatus, StatusTransitionError};
pub use storage_path::{StoragePath, StoragePathError};
pub use user_plan::UserPlan;
