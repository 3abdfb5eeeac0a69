mod in_memory_audio_job_repository;
mod pg_audio_job_repository;
mod repository_factory;

pub use in_memory_audio_job_repository::InMemoryAudioJobRepository;
pub use pg_audio_job_repository::PgAudioJobRepository;
pub use repository_factory::RepositoryFactory;
