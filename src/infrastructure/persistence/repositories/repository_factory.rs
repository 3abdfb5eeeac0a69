use std::sync::Arc;

use crate::application::ports::{AudioJobRepository, RepositoryError};
use crate::infrastructure::persistence::{create_pool, run_migrations};
use crate::presentation::config::{DatabaseSettings, StoreProvider};

use super::in_memory_audio_job_repository::InMemoryAudioJobRepository;
use super::pg_audio_job_repository::PgAudioJobRepository;

pub struct RepositoryFactory;

impl RepositoryFactory {
    pub async fn create(
        settings: &DatabaseSettings,
    ) -> Result<Arc<dyn AudioJobRepository>, RepositoryError> {
        match settings.provider {
            StoreProvider::Postgres => {
                let pool = create_pool(settings).await?;
                run_migrations(&pool).await?;
                Ok(Arc::new(PgAudioJobRepository::new(pool)))
            }
            StoreProvider::Memory => {
                tracing::warn!("Using in-memory job store, records are lost on restart");
                Ok(Arc::new(InMemoryAudioJobRepository::new()))
            }
        }
    }
}
